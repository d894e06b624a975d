//! Request extractors
//!
//! This module provides the extractors handlers use to read requests:
//! [`Wire`] decodes a message body in whichever encoding the client sent,
//! [`WireFormat`] picks the response encoding from `Accept`, and
//! [`RequestContext`] carries per-request identification for logging.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, request::Parts},
};
use serde::{de::DeserializeOwned, Deserialize};
use std::convert::Infallible;
use tracing::debug;
use uuid::Uuid;

use super::AppState;
use crate::errors::{AppError, WebError};
use crate::proto::WireFormat;

/// A message decoded from the request body
///
/// The encoding follows `Content-Type`: protobuf when the header is absent or
/// names protobuf, JSON for `application/json`. Any other media type is
/// rejected with 415, an undecodable body with 400.
#[derive(Debug, Clone)]
pub struct Wire<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Wire<T>
where
    S: Send + Sync,
    T: prost::Message + Default + DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = match req.headers().get(header::CONTENT_TYPE) {
            None => WireFormat::Protobuf,
            Some(value) => {
                let content_type = value
                    .to_str()
                    .map_err(|_| WebError::unsupported_content_type("<non-ascii>"))?;
                WireFormat::from_media_type(content_type)
                    .ok_or_else(|| WebError::unsupported_content_type(content_type))?
            }
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| WebError::invalid_request("body", e.body_text()))?;

        let message = match format {
            WireFormat::Protobuf => T::decode(body).map_err(WebError::from)?,
            WireFormat::Json => serde_json::from_slice(&body).map_err(WebError::from)?,
        };

        Ok(Wire(message))
    }
}

/// Choose the response encoding for an `Accept` header value
///
/// Media ranges are tried in the order given; the first one naming a known
/// format wins. Wildcards and unknown types fall through to `default`.
pub fn negotiate(accept: Option<&str>, default: WireFormat) -> WireFormat {
    accept
        .into_iter()
        .flat_map(|value| value.split(','))
        .find_map(WireFormat::from_media_type)
        .unwrap_or(default)
}

#[async_trait]
impl FromRequestParts<AppState> for WireFormat {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|h| h.to_str().ok());

        let format = negotiate(accept, state.config.web.default_format);
        debug!("Responding as {} (Accept: {:?})", format, accept);
        Ok(format)
    }
}

/// Path parameters whose rejection goes through [`AppError`]
///
/// Unparseable segments answer 400 with an empty body, like every other
/// client error.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| WebError::invalid_request("path", e.body_text()))?;
        Ok(ApiPath(value))
    }
}

/// Owner search parameters from the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerSearchParams {
    /// Last name prefix
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for OwnerSearchParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<OwnerSearchParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| WebError::invalid_request("query", e.body_text()))?;
        Ok(params)
    }
}

/// Request context information
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            user_agent: None,
            real_ip: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl RequestContext {
    /// Build the context from request headers
    pub fn from_headers(headers: &axum::http::HeaderMap) -> Self {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = headers
            .get("x-real-ip")
            .or_else(|| headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .map(|s| s.split(',').next().unwrap_or(s).trim().to_string());

        Self {
            user_agent,
            real_ip,
            ..Self::default()
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Reuse the context the logging middleware attached, if any
        if let Some(context) = parts.extensions.get::<RequestContext>() {
            return Ok(context.clone());
        }
        Ok(Self::from_headers(&parts.headers))
    }
}
