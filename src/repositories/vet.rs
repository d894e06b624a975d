//! Vet repository implementation
//!
//! Specialty assignments live in the `vet_specialties` join table. Create and
//! update replace the full assignment set inside one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::traits::{row_id, Repository, BIND_CHUNK_SIZE};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Specialty, Vet, VetCreateRequest, VetUpdateRequest};

#[derive(Debug, FromRow)]
struct VetRow {
    id: i32,
    first_name: String,
    last_name: String,
}

#[derive(Debug, FromRow)]
struct VetSpecialtyRow {
    vet_id: i32,
    id: i32,
    name: String,
}

#[derive(Clone)]
pub struct VetRepository {
    pool: SqlitePool,
}

impl VetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn specialties_for_vets(
        &self,
        vet_ids: &[i32],
    ) -> RepositoryResult<HashMap<i32, Vec<Specialty>>> {
        let mut grouped: HashMap<i32, Vec<Specialty>> = HashMap::new();
        if vet_ids.is_empty() {
            return Ok(grouped);
        }

        for chunk in vet_ids.chunks(BIND_CHUNK_SIZE) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT vs.vet_id, s.id, s.name FROM vet_specialties vs \
                 JOIN specialties s ON s.id = vs.specialty_id WHERE vs.vet_id IN (",
            );
            let mut separated = builder.separated(", ");
            for vet_id in chunk {
                separated.push_bind(*vet_id);
            }
            separated.push_unseparated(") ORDER BY s.name, s.id");

            let rows = builder
                .build_query_as::<VetSpecialtyRow>()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::from_sqlx("select_vet_specialties", e))?;

            for row in rows {
                grouped.entry(row.vet_id).or_default().push(Specialty {
                    id: row.id,
                    name: row.name,
                });
            }
        }
        Ok(grouped)
    }

    async fn hydrate(&self, rows: Vec<VetRow>) -> RepositoryResult<Vec<Vet>> {
        let vet_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut specialties = self.specialties_for_vets(&vet_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| Vet {
                specialties: specialties.remove(&row.id).unwrap_or_default(),
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
            })
            .collect())
    }
}

/// Replace the specialty set of a vet; duplicate ids collapse to one row
async fn assign_specialties(
    conn: &mut SqliteConnection,
    vet_id: i32,
    specialty_ids: &[i32],
) -> RepositoryResult<()> {
    sqlx::query("DELETE FROM vet_specialties WHERE vet_id = ?")
        .bind(vet_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| RepositoryError::from_sqlx("clear_vet_specialties", e))?;

    for specialty_id in specialty_ids {
        sqlx::query("INSERT OR IGNORE INTO vet_specialties (vet_id, specialty_id) VALUES (?, ?)")
            .bind(vet_id)
            .bind(specialty_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepositoryError::from_sqlx("insert_vet_specialty", e))?;
    }
    Ok(())
}

#[async_trait]
impl Repository<Vet, i32> for VetRepository {
    type CreateRequest = VetCreateRequest;
    type UpdateRequest = VetUpdateRequest;
    type Query = ();

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Vet>> {
        let row =
            sqlx::query_as::<_, VetRow>("SELECT id, first_name, last_name FROM vets WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::from_sqlx("select_vet", e))?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self, _query: ()) -> RepositoryResult<Vec<Vet>> {
        let rows =
            sqlx::query_as::<_, VetRow>("SELECT id, first_name, last_name FROM vets ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::from_sqlx("select_vets", e))?;

        self.hydrate(rows).await
    }

    async fn create(&self, request: VetCreateRequest) -> RepositoryResult<Vet> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::from_sqlx("begin_insert_vet", e))?;

        let result = sqlx::query("INSERT INTO vets (first_name, last_name) VALUES (?, ?)")
            .bind(&request.first_name)
            .bind(&request.last_name)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_sqlx("insert_vet", e))?;
        let id = row_id("vets", result.last_insert_rowid())?;

        assign_specialties(&mut *tx, id, &request.specialty_ids).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::from_sqlx("commit_insert_vet", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("vets", "id", id))
    }

    async fn update(&self, id: i32, request: VetUpdateRequest) -> RepositoryResult<Vet> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::from_sqlx("begin_update_vet", e))?;

        let result = sqlx::query("UPDATE vets SET first_name = ?, last_name = ? WHERE id = ?")
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_sqlx("update_vet", e))?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| RepositoryError::from_sqlx("rollback_update_vet", e))?;
            return Err(RepositoryError::record_not_found("vets", "id", id));
        }

        assign_specialties(&mut *tx, id, &request.specialty_ids).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::from_sqlx("commit_update_vet", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("vets", "id", id))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM vets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_vet", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("vets", "id", id));
        }
        Ok(())
    }

    async fn count(&self, _query: ()) -> RepositoryResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("count_vets", e))?;
        Ok(count as u64)
    }
}
