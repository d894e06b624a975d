//! Visit repository implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::traits::{row_id, Repository};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Visit, VisitCreateRequest, VisitUpdateRequest};

const SELECT_VISITS: &str = "SELECT id, visit_date, description, pet_id FROM visits";

/// Query parameters specific to visits
#[derive(Debug, Clone, Default)]
pub struct VisitQuery {
    /// Only visits of this pet
    pub pet_id: Option<i32>,
}

impl VisitQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pet(pet_id: i32) -> Self {
        Self {
            pet_id: Some(pet_id),
        }
    }
}

#[derive(Clone)]
pub struct VisitRepository {
    pool: SqlitePool,
}

impl VisitRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Visit, i32> for VisitRepository {
    type CreateRequest = VisitCreateRequest;
    type UpdateRequest = VisitUpdateRequest;
    type Query = VisitQuery;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Visit>> {
        sqlx::query_as::<_, Visit>(&format!("{} WHERE id = ?", SELECT_VISITS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_visit", e))
    }

    async fn find_all(&self, query: VisitQuery) -> RepositoryResult<Vec<Visit>> {
        let visits = match query.pet_id {
            Some(pet_id) => {
                sqlx::query_as::<_, Visit>(&format!(
                    "{} WHERE pet_id = ? ORDER BY visit_date, id",
                    SELECT_VISITS
                ))
                .bind(pet_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Visit>(&format!("{} ORDER BY id", SELECT_VISITS))
                    .fetch_all(&self.pool)
                    .await
            }
        };

        visits.map_err(|e| RepositoryError::from_sqlx("select_visits", e))
    }

    async fn create(&self, request: VisitCreateRequest) -> RepositoryResult<Visit> {
        let result =
            sqlx::query("INSERT INTO visits (pet_id, visit_date, description) VALUES (?, ?, ?)")
                .bind(request.pet_id)
                .bind(request.date)
                .bind(&request.description)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::from_sqlx("insert_visit", e))?;

        Ok(Visit {
            id: row_id("visits", result.last_insert_rowid())?,
            date: request.date,
            description: request.description,
            pet_id: request.pet_id,
        })
    }

    async fn update(&self, id: i32, request: VisitUpdateRequest) -> RepositoryResult<Visit> {
        let result = sqlx::query("UPDATE visits SET visit_date = ?, description = ? WHERE id = ?")
            .bind(request.date)
            .bind(&request.description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("update_visit", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("visits", "id", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("visits", "id", id))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM visits WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_visit", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("visits", "id", id));
        }
        Ok(())
    }

    async fn count(&self, query: VisitQuery) -> RepositoryResult<u64> {
        let count = match query.pet_id {
            Some(pet_id) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visits WHERE pet_id = ?")
                    .bind(pet_id)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visits")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::from_sqlx("count_visits", e))?;

        Ok(count as u64)
    }
}
