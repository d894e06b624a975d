//! Owner repository implementation

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use super::pet::pets_for_owners;
use super::traits::{row_id, Repository};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Owner, OwnerCreateRequest, OwnerUpdateRequest};

const SELECT_OWNERS: &str =
    "SELECT id, first_name, last_name, address, city, telephone FROM owners";

/// Query parameters specific to owners
#[derive(Debug, Clone, Default)]
pub struct OwnerQuery {
    /// Case-sensitive last name prefix
    pub last_name: Option<String>,
}

impl OwnerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_name<S: Into<String>>(prefix: S) -> Self {
        Self {
            last_name: Some(prefix.into()),
        }
    }
}

#[derive(Debug, FromRow)]
struct OwnerRow {
    id: i32,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

#[derive(Clone)]
pub struct OwnerRepository {
    pool: SqlitePool,
}

impl OwnerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn hydrate(&self, rows: Vec<OwnerRow>) -> RepositoryResult<Vec<Owner>> {
        let owner_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut pets = pets_for_owners(&self.pool, &owner_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| Owner {
                pets: pets.remove(&row.id).unwrap_or_default(),
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
                address: row.address,
                city: row.city,
                telephone: row.telephone,
            })
            .collect())
    }
}

/// Escape LIKE wildcards so a prefix only matches literally
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl Repository<Owner, i32> for OwnerRepository {
    type CreateRequest = OwnerCreateRequest;
    type UpdateRequest = OwnerUpdateRequest;
    type Query = OwnerQuery;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Owner>> {
        let row = sqlx::query_as::<_, OwnerRow>(&format!("{} WHERE id = ?", SELECT_OWNERS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx("select_owner", e))?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self, query: OwnerQuery) -> RepositoryResult<Vec<Owner>> {
        // LIKE is case-insensitive for ASCII in SQLite; the prefix must match exactly
        let rows = match query.last_name {
            Some(prefix) => {
                sqlx::query_as::<_, OwnerRow>(&format!(
                    "{} WHERE last_name LIKE ? ESCAPE '\\' AND substr(last_name, 1, length(?)) = ? ORDER BY id",
                    SELECT_OWNERS
                ))
                .bind(like_prefix(&prefix))
                .bind(&prefix)
                .bind(&prefix)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, OwnerRow>(&format!("{} ORDER BY id", SELECT_OWNERS))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::from_sqlx("select_owners", e))?;

        self.hydrate(rows).await
    }

    async fn create(&self, request: OwnerCreateRequest) -> RepositoryResult<Owner> {
        let result = sqlx::query(
            "INSERT INTO owners (first_name, last_name, address, city, telephone) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.address)
        .bind(&request.city)
        .bind(&request.telephone)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx("insert_owner", e))?;

        Ok(Owner {
            id: row_id("owners", result.last_insert_rowid())?,
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            city: request.city,
            telephone: request.telephone,
            pets: Vec::new(),
        })
    }

    async fn update(&self, id: i32, request: OwnerUpdateRequest) -> RepositoryResult<Owner> {
        let result = sqlx::query(
            "UPDATE owners SET first_name = ?, last_name = ?, address = ?, city = ?, telephone = ? WHERE id = ?",
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.address)
        .bind(&request.city)
        .bind(&request.telephone)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx("update_owner", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found("owners", "id", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("owners", "id", id))
    }

    /// Removes the owner together with their pets and the pets' visits.
    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::from_sqlx("begin_delete_owner", e))?;

        let visits = sqlx::query(
            "DELETE FROM visits WHERE pet_id IN (SELECT id FROM pets WHERE owner_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::from_sqlx("delete_owner_visits", e))?;

        let pets = sqlx::query("DELETE FROM pets WHERE owner_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_owner_pets", e))?;

        let result = sqlx::query("DELETE FROM owners WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_sqlx("delete_owner", e))?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| RepositoryError::from_sqlx("rollback_delete_owner", e))?;
            return Err(RepositoryError::record_not_found("owners", "id", id));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::from_sqlx("commit_delete_owner", e))?;

        debug!(
            "Deleted owner {} with {} pets and {} visits",
            id,
            pets.rows_affected(),
            visits.rows_affected()
        );
        Ok(())
    }

    async fn count(&self, query: OwnerQuery) -> RepositoryResult<u64> {
        let count = match query.last_name {
            Some(prefix) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM owners WHERE last_name LIKE ? ESCAPE '\\' AND substr(last_name, 1, length(?)) = ?",
                )
                .bind(like_prefix(&prefix))
                .bind(&prefix)
                .bind(&prefix)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM owners")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::from_sqlx("count_owners", e))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_prefix_escapes_wildcards() {
        assert_eq!(like_prefix("Dav"), "Dav%");
        assert_eq!(like_prefix("50%_off"), "50\\%\\_off%");
        assert_eq!(like_prefix(""), "%");
    }
}
