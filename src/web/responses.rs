//! HTTP response types
//!
//! Successful responses carry a single wire message encoded the way the
//! client asked for. Error responses carry only a status; the cause goes to
//! the log instead.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::errors::{AppError, AppResult};
use crate::proto::WireFormat;

/// A wire message with its status and negotiated encoding
#[derive(Debug, Clone)]
pub struct Reply<T> {
    status: StatusCode,
    format: WireFormat,
    message: T,
}

impl<T> Reply<T>
where
    T: prost::Message + Serialize,
{
    /// 200 with a body
    pub fn ok(format: WireFormat, message: T) -> Self {
        Self::with_status(StatusCode::OK, format, message)
    }

    /// 201 with the persisted representation
    pub fn created(format: WireFormat, message: T) -> Self {
        Self::with_status(StatusCode::CREATED, format, message)
    }

    pub fn with_status(status: StatusCode, format: WireFormat, message: T) -> Self {
        Self {
            status,
            format,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self.format {
            WireFormat::Protobuf => Ok(self.message.encode_to_vec()),
            WireFormat::Json => serde_json::to_vec(&self.message),
        }
    }
}

impl<T> IntoResponse for Reply<T>
where
    T: prost::Message + Serialize,
{
    fn into_response(self) -> Response {
        match self.encode() {
            Ok(body) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(self.format.media_type()),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                error!("Failed to encode {} response: {}", self.format, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Empty 204 response for updates and deletes
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Reject empty listings
///
/// Every list endpoint answers 404 rather than an empty collection.
pub fn non_empty<T>(resource: &str, items: Vec<T>) -> AppResult<Vec<T>> {
    if items.is_empty() {
        Err(AppError::not_found(resource, "*"))
    } else {
        Ok(items)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed ({}): {}", status, self);
        } else if status == StatusCode::NOT_FOUND {
            debug!("Request failed ({}): {}", status, self);
        } else {
            warn!("Request rejected ({}): {}", status, self);
        }
        status.into_response()
    }
}
