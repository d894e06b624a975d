//! Wire messages exchanged with clients
//!
//! The message types are `prost` output for `proto/petclinic.proto`, checked in
//! so the build does not depend on `protoc`. Every message also derives serde
//! with camelCase names, which gives the JSON mirror of the protobuf shape.

use serde::{Deserialize, Serialize};

#[allow(clippy::all)]
mod petclinic;

pub mod convert;

pub use petclinic::*;

/// Media type used for protobuf bodies
pub const PROTOBUF_MEDIA_TYPE: &str = "application/x-protobuf";

/// Media type used for JSON bodies
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Encoding of a request or response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Protobuf,
    Json,
}

impl WireFormat {
    /// Content-Type header value for this format
    pub fn media_type(self) -> &'static str {
        match self {
            WireFormat::Protobuf => PROTOBUF_MEDIA_TYPE,
            WireFormat::Json => JSON_MEDIA_TYPE,
        }
    }

    /// Match a media type (parameters ignored) against the known formats
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/x-protobuf" | "application/protobuf" | "application/vnd.google.protobuf" => {
                Some(WireFormat::Protobuf)
            }
            "application/json" => Some(WireFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for WireFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireFormat::Protobuf => write!(f, "protobuf"),
            WireFormat::Json => write!(f, "json"),
        }
    }
}
