//! Error Types
//!
//! `ApiError` is the single shape every failed API call takes. `Error` adds
//! the failures that are not API-shaped.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Code used for failures where no response reached the client
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Code used for non-2xx responses without a server-supplied code
pub const HTTP_ERROR: &str = "HTTP_ERROR";

/// Common result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminator over the kinds of `ApiError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received (status 0)
    Network,
    /// Non-2xx response
    Http,
    /// Non-2xx response carrying field-level details
    Validation,
}

/// A server-reported problem with one named form input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FieldDetail {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A failed API call: transport failure or non-2xx response
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    /// HTTP status, or 0 when no response was received
    pub status: u16,
    pub code: String,
    pub message: String,
    pub details: Vec<FieldDetail>,
    /// Correlation id for matching server-side logs
    pub request_id: Option<String>,
}

impl ApiError {
    /// Transport-level failure; nothing about the underlying cause is kept.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Network,
            status: 0,
            code: NETWORK_ERROR.to_string(),
            message: message.into(),
            details: Vec::new(),
            request_id: None,
        }
    }

    pub fn http(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        details: Vec<FieldDetail>,
        request_id: Option<String>,
    ) -> Self {
        let kind = if details.is_empty() {
            ErrorKind::Http
        } else {
            ErrorKind::Validation
        };
        Self {
            kind,
            status,
            code: code.into(),
            message: message.into(),
            details,
            request_id,
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == ErrorKind::Network
    }
}

/// Any failure surfaced by this crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Anything not shaped as an `ApiError` (bad payloads, undecodable data)
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            Error::Unexpected(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_details() {
        let plain = ApiError::http(409, "CONFLICT", "busy", vec![], None);
        assert_eq!(plain.kind, ErrorKind::Http);

        let invalid = ApiError::http(422, "VALIDATION_ERROR", "bad", vec![FieldDetail::new("name", "required")], None);
        assert_eq!(invalid.kind, ErrorKind::Validation);

        let offline = ApiError::network("offline");
        assert_eq!(offline.status, 0);
        assert_eq!(offline.code, NETWORK_ERROR);
        assert!(offline.is_network());
    }

    #[test]
    fn test_field_detail_tolerates_null_field() {
        let detail: FieldDetail =
            serde_json::from_str(r#"{"field": null, "message": "Invalid input", "code": "VALIDATION_ERROR"}"#).unwrap();
        assert_eq!(detail.field, "");
        assert_eq!(detail.message, "Invalid input");
        assert_eq!(detail.code.as_deref(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn test_display_is_message() {
        let err = Error::from(ApiError::http(404, HTTP_ERROR, "not here", vec![], None));
        assert_eq!(err.to_string(), "not here");
        assert!(err.as_api().is_some());
        assert!(Error::Unexpected("boom".into()).as_api().is_none());
    }
}
