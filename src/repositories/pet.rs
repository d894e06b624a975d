//! Pet repository implementation
//!
//! Pets are always returned complete: the pet type is joined in and the
//! visits are loaded alongside. The loading helpers here are shared with the
//! owner repository, which hydrates every owner's pets the same way.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use super::traits::{row_id, Repository, BIND_CHUNK_SIZE};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Pet, PetCreateRequest, PetType, PetUpdateRequest, Visit};

const SELECT_PETS: &str = r#"
    SELECT p.id, p.name, p.birth_date, p.owner_id, t.id AS type_id, t.name AS type_name
    FROM pets p
    JOIN types t ON t.id = p.type_id
"#;

#[derive(Debug, FromRow)]
struct PetRow {
    id: i32,
    name: String,
    birth_date: NaiveDate,
    owner_id: i32,
    type_id: i32,
    type_name: String,
}

impl PetRow {
    fn into_pet(self, visits: Vec<Visit>) -> Pet {
        Pet {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
            pet_type: PetType {
                id: self.type_id,
                name: self.type_name,
            },
            owner_id: self.owner_id,
            visits,
        }
    }
}

/// Visits of the given pets, grouped by pet id and ordered by date
pub(crate) async fn visits_for_pets(
    pool: &SqlitePool,
    pet_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<Visit>>> {
    let mut grouped: HashMap<i32, Vec<Visit>> = HashMap::new();
    if pet_ids.is_empty() {
        return Ok(grouped);
    }

    for chunk in pet_ids.chunks(BIND_CHUNK_SIZE) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, visit_date, description, pet_id FROM visits WHERE pet_id IN (",
        );
        let mut separated = builder.separated(", ");
        for pet_id in chunk {
            separated.push_bind(*pet_id);
        }
        separated.push_unseparated(") ORDER BY visit_date, id");

        let visits = builder
            .build_query_as::<Visit>()
            .fetch_all(pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_pet_visits", e))?;

        for visit in visits {
            grouped.entry(visit.pet_id).or_default().push(visit);
        }
    }
    Ok(grouped)
}

async fn hydrate(pool: &SqlitePool, rows: Vec<PetRow>) -> RepositoryResult<Vec<Pet>> {
    let pet_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let mut visits = visits_for_pets(pool, &pet_ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let pet_visits = visits.remove(&row.id).unwrap_or_default();
            row.into_pet(pet_visits)
        })
        .collect())
}

/// Pets of the given owners, grouped by owner id and ordered by name
pub(crate) async fn pets_for_owners(
    pool: &SqlitePool,
    owner_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<Pet>>> {
    let mut grouped: HashMap<i32, Vec<Pet>> = HashMap::new();
    if owner_ids.is_empty() {
        return Ok(grouped);
    }

    for chunk in owner_ids.chunks(BIND_CHUNK_SIZE) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_PETS);
        builder.push(" WHERE p.owner_id IN (");
        let mut separated = builder.separated(", ");
        for owner_id in chunk {
            separated.push_bind(*owner_id);
        }
        separated.push_unseparated(") ORDER BY p.name, p.id");

        let rows = builder
            .build_query_as::<PetRow>()
            .fetch_all(pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_owner_pets", e))?;

        for pet in hydrate(pool, rows).await? {
            grouped.entry(pet.owner_id).or_default().push(pet);
        }
    }
    Ok(grouped)
}

#[derive(Clone)]
pub struct PetRepository {
    pool: SqlitePool,
}

impl PetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Pet, i32> for PetRepository {
    type CreateRequest = PetCreateRequest;
    type UpdateRequest = PetUpdateRequest;
    type Query = ();

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Pet>> {
        let row = sqlx::query_as::<_, PetRow>(&format!("{} WHERE p.id = ?", SELECT_PETS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_pet", e))?;

        match row {
            Some(row) => Ok(hydrate(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self, _query: ()) -> RepositoryResult<Vec<Pet>> {
        let rows = sqlx::query_as::<_, PetRow>(&format!("{} ORDER BY p.id", SELECT_PETS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_pets", e))?;

        hydrate(&self.pool, rows).await
    }

    async fn create(&self, request: PetCreateRequest) -> RepositoryResult<Pet> {
        let result = sqlx::query(
            "INSERT INTO pets (name, birth_date, type_id, owner_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(request.birth_date)
        .bind(request.pet_type_id)
        .bind(request.owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx("insert_pet", e))?;

        let id = row_id("pets", result.last_insert_rowid())?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("pets", "id", id))
    }

    async fn update(&self, id: i32, request: PetUpdateRequest) -> RepositoryResult<Pet> {
        let result = sqlx::query(
            "UPDATE pets SET name = ?, birth_date = ?, type_id = ?, owner_id = ? WHERE id = ?",
        )
        .bind(&request.name)
        .bind(request.birth_date)
        .bind(request.pet_type_id)
        .bind(request.owner_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx("update_pet", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("pets", "id", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("pets", "id", id))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_pet", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("pets", "id", id));
        }
        Ok(())
    }

    async fn count(&self, _query: ()) -> RepositoryResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("count_pets", e))?;
        Ok(count as u64)
    }
}
