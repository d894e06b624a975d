//! Error type definitions for the petclinic service
//!
//! This module defines all error types used throughout the application,
//! layered the same way the code is: repositories raise [`RepositoryError`],
//! the web boundary raises [`WebError`], and everything converges on
//! [`AppError`], which knows its HTTP status.

use axum::http::StatusCode;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository layer errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Web layer errors
    #[error("Web error: {0}")]
    Web(#[from] WebError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Repository layer specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// SQL query execution failures
    #[error("Query failed: {query} - {message}")]
    QueryFailed { query: String, message: String },

    /// Constraint violations (unique, foreign key, etc.)
    #[error("Constraint violation: {constraint} - {message}")]
    ConstraintViolation { constraint: String, message: String },

    /// Record not found
    #[error("Record not found: {table} with {field} = {value}")]
    RecordNotFound {
        table: String,
        field: String,
        value: String,
    },
}

/// Web layer specific errors
#[derive(Error, Debug)]
pub enum WebError {
    /// Invalid request format
    #[error("Invalid request: {field} - {message}")]
    InvalidRequest { field: String, message: String },

    /// Unsupported content type
    #[error("Unsupported content type: {content_type}")]
    UnsupportedContentType { content_type: String },

    /// Protobuf body could not be decoded
    #[error("Protobuf decode error: {0}")]
    ProtobufDecode(#[from] prost::DecodeError),

    /// JSON parsing errors
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: ToString>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Repository(RepositoryError::RecordNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Web(WebError::UnsupportedContentType { .. }) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::Web(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Repository(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error means the addressed entity does not exist
    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }
}

impl RepositoryError {
    /// Create a query failed error
    pub fn query_failed<Q: Into<String>, M: ToString>(query: Q, message: M) -> Self {
        Self::QueryFailed {
            query: query.into(),
            message: message.to_string(),
        }
    }

    /// Create a record not found error
    pub fn record_not_found<T: Into<String>, F: Into<String>, V: ToString>(
        table: T,
        field: F,
        value: V,
    ) -> Self {
        Self::RecordNotFound {
            table: table.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Classify a sqlx error raised while running `query`
    ///
    /// SQLite reports foreign key and uniqueness failures as database errors;
    /// those become [`RepositoryError::ConstraintViolation`], everything else
    /// a [`RepositoryError::QueryFailed`].
    pub fn from_sqlx<Q: Into<String>>(query: Q, error: sqlx::Error) -> Self {
        let query = query.into();
        if let sqlx::Error::Database(db_error) = &error {
            if db_error.is_foreign_key_violation() || db_error.is_unique_violation() {
                return Self::ConstraintViolation {
                    constraint: query,
                    message: db_error.message().to_string(),
                };
            }
        }
        Self::query_failed(query, error)
    }
}

impl WebError {
    /// Create an invalid request error
    pub fn invalid_request<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported content type error
    pub fn unsupported_content_type<C: Into<String>>(content_type: C) -> Self {
        Self::UnsupportedContentType {
            content_type: content_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            AppError::not_found("owner", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        let repo: AppError = RepositoryError::record_not_found("owners", "id", 7).into();
        assert_eq!(repo.status_code(), StatusCode::NOT_FOUND);
        assert!(repo.is_not_found());
    }

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(
            AppError::validation("bad date").status_code(),
            StatusCode::BAD_REQUEST
        );
        let unsupported: AppError = WebError::unsupported_content_type("text/plain").into();
        assert_eq!(unsupported.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let invalid: AppError = WebError::invalid_request("body", "empty").into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_errors_map_to_500() {
        let repo: AppError = RepositoryError::query_failed("select_owner", "disk I/O error").into();
        assert_eq!(repo.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!repo.is_not_found());
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let error = AppError::not_found("pet", 3);
        assert_eq!(error.to_string(), "Not found: pet with id 3");
        let error = RepositoryError::record_not_found("vets", "id", 9);
        assert_eq!(error.to_string(), "Record not found: vets with id = 9");
    }
}
