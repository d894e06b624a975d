//! Pet type repository implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::traits::{row_id, Repository};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{PetType, PetTypeRequest};

#[derive(Clone)]
pub struct PetTypeRepository {
    pool: SqlitePool,
}

impl PetTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<PetType, i32> for PetTypeRepository {
    type CreateRequest = PetTypeRequest;
    type UpdateRequest = PetTypeRequest;
    type Query = ();

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<PetType>> {
        sqlx::query_as::<_, PetType>("SELECT id, name FROM types WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_pet_type", e))
    }

    async fn find_all(&self, _query: ()) -> RepositoryResult<Vec<PetType>> {
        sqlx::query_as::<_, PetType>("SELECT id, name FROM types ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_pet_types", e))
    }

    async fn create(&self, request: PetTypeRequest) -> RepositoryResult<PetType> {
        let result = sqlx::query("INSERT INTO types (name) VALUES (?)")
            .bind(&request.name)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("insert_pet_type", e))?;

        Ok(PetType {
            id: row_id("types", result.last_insert_rowid())?,
            name: request.name,
        })
    }

    async fn update(&self, id: i32, request: PetTypeRequest) -> RepositoryResult<PetType> {
        let result = sqlx::query("UPDATE types SET name = ? WHERE id = ?")
            .bind(&request.name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("update_pet_type", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("types", "id", id));
        }

        Ok(PetType {
            id,
            name: request.name,
        })
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM types WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_pet_type", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("types", "id", id));
        }
        Ok(())
    }

    async fn count(&self, _query: ()) -> RepositoryResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM types")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("count_pet_types", e))?;
        Ok(count as u64)
    }
}
