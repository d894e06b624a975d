//! Repository trait definitions
//!
//! This module defines the core trait that all repositories implement,
//! providing a consistent interface for data access operations.

use async_trait::async_trait;

use crate::errors::RepositoryResult;

/// Core repository trait providing CRUD operations
///
/// # Type Parameters
///
/// * `T` - The entity type (e.g., Owner, Vet)
/// * `ID` - The identifier type (row ids assigned by SQLite)
///
/// # Examples
///
/// ```rust,ignore
/// use petclinic_rest::repositories::{Repository, OwnerQuery};
///
/// async fn example<R: Repository<Owner, i32, Query = OwnerQuery>>(repo: R) {
///     let owner = repo.find_by_id(1).await?;
///     let davises = repo.find_all(OwnerQuery::last_name("Davis")).await?;
/// }
/// ```
#[async_trait]
pub trait Repository<T, ID: Send + 'static>: Send + Sync {
    /// Request type for creating new entities
    type CreateRequest: Send;
    /// Request type for updating existing entities
    type UpdateRequest: Send;
    /// Query type for filtering
    type Query: Send;

    /// Find an entity by its ID
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - Entity found
    /// * `Ok(None)` - Entity not found
    /// * `Err(RepositoryError)` - Database or other error
    async fn find_by_id(&self, id: ID) -> RepositoryResult<Option<T>>;

    /// Find all entities matching a query (may be empty)
    async fn find_all(&self, query: Self::Query) -> RepositoryResult<Vec<T>>;

    /// Create a new entity, returning it with its generated ID
    async fn create(&self, request: Self::CreateRequest) -> RepositoryResult<T>;

    /// Update an existing entity
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - Updated entity
    /// * `Err(RepositoryError::RecordNotFound)` - No entity with this ID
    async fn update(&self, id: ID, request: Self::UpdateRequest) -> RepositoryResult<T>;

    /// Delete an entity by ID
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Entity deleted successfully
    /// * `Err(RepositoryError::RecordNotFound)` - No entity with this ID
    async fn delete(&self, id: ID) -> RepositoryResult<()>;

    /// Count entities matching a query
    async fn count(&self, query: Self::Query) -> RepositoryResult<u64>;

    /// Check if an entity exists by ID
    async fn exists(&self, id: ID) -> RepositoryResult<bool> {
        match self.find_by_id(id).await? {
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}

/// Ids bound per `IN (...)` list; SQLite caps the host parameters of a statement
pub(crate) const BIND_CHUNK_SIZE: usize = 500;

/// Convert a SQLite rowid into the 32-bit ids exposed on the wire
pub(crate) fn row_id(table: &str, rowid: i64) -> RepositoryResult<i32> {
    i32::try_from(rowid).map_err(|_| {
        crate::errors::RepositoryError::query_failed(
            format!("insert_{}", table),
            format!("row id {} exceeds the 32-bit id range", rowid),
        )
    })
}
