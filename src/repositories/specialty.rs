//! Specialty repository implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::traits::{row_id, Repository};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Specialty, SpecialtyRequest};

#[derive(Clone)]
pub struct SpecialtyRepository {
    pool: SqlitePool,
}

impl SpecialtyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All specialties whose name is one of `names`, in id order.
    ///
    /// Names are compared exactly; several specialties may share a name and
    /// all of them are returned.
    pub async fn find_by_names(&self, names: &[String]) -> RepositoryResult<Vec<Specialty>> {
        let all = self.find_all(()).await?;
        Ok(all
            .into_iter()
            .filter(|specialty| names.iter().any(|name| *name == specialty.name))
            .collect())
    }
}

#[async_trait]
impl Repository<Specialty, i32> for SpecialtyRepository {
    type CreateRequest = SpecialtyRequest;
    type UpdateRequest = SpecialtyRequest;
    type Query = ();

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Specialty>> {
        sqlx::query_as::<_, Specialty>("SELECT id, name FROM specialties WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_specialty", e))
    }

    async fn find_all(&self, _query: ()) -> RepositoryResult<Vec<Specialty>> {
        sqlx::query_as::<_, Specialty>("SELECT id, name FROM specialties ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_specialties", e))
    }

    async fn create(&self, request: SpecialtyRequest) -> RepositoryResult<Specialty> {
        let result = sqlx::query("INSERT INTO specialties (name) VALUES (?)")
            .bind(&request.name)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("insert_specialty", e))?;

        Ok(Specialty {
            id: row_id("specialties", result.last_insert_rowid())?,
            name: request.name,
        })
    }

    async fn update(&self, id: i32, request: SpecialtyRequest) -> RepositoryResult<Specialty> {
        let result = sqlx::query("UPDATE specialties SET name = ? WHERE id = ?")
            .bind(&request.name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("update_specialty", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("specialties", "id", id));
        }

        Ok(Specialty {
            id,
            name: request.name,
        })
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM specialties WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_specialty", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("specialties", "id", id));
        }
        Ok(())
    }

    async fn count(&self, _query: ()) -> RepositoryResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM specialties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("count_specialties", e))?;
        Ok(count as u64)
    }
}
