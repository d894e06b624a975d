//! Centralized error handling for the petclinic service
//!
//! # Error Categories
//!
//! - **Database Errors**: SQLite operations, migrations, connection issues
//! - **Repository Errors**: Data access layer failures
//! - **Validation Errors**: Malformed dates and other bad field values
//! - **Web Errors**: Body decoding and content negotiation failures
//!
//! # Usage
//!
//! ```rust
//! use petclinic_rest::errors::{AppError, AppResult};
//!
//! fn find(id: i32) -> AppResult<String> {
//!     Err(AppError::not_found("owner", id))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Web Results
pub type WebResult<T> = Result<T, WebError>;
