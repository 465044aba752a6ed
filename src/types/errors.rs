//! Parameter check error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Messages are
//! rendered from the catalog in [`crate::messages`] and always start with the
//! message code, e.g. `PARAM000037: Argument port cannot be null`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages::{self, MessageId};

/// Parameter check result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure category of a parameter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required value was absent (illegal argument).
    MissingArgument,
    /// Required value was absent, reported as a null reference.
    NullReference,
    /// Value was present but had zero length.
    EmptyArgument,
    /// The checks themselves were misused.
    InvalidUsage,
}

/// Main error enum for parameter checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Absent value, general illegal-argument form (maps to HTTP 400).
    #[error("{}: Argument {name} cannot be null", messages::ARGUMENT_CANNOT_BE_NULL)]
    MissingArgument { name: String },

    /// Absent value, strict null-reference form (maps to HTTP 400).
    #[error(
        "{}: Argument {name} cannot be null (null reference)",
        messages::ARGUMENT_CANNOT_BE_NULL_STRICT
    )]
    NullReference { name: String },

    /// Absent element inside an array parameter (maps to HTTP 400).
    #[error(
        "{}: Array index {index} of parameter '{name}' may not be null",
        messages::NULL_ARRAY_PARAM
    )]
    MissingArrayElement { name: String, index: usize },

    /// Present but zero-length value (maps to HTTP 400).
    #[error("{}: Parameter '{name}' may not be empty", messages::EMPTY_PARAM)]
    EmptyArgument { name: String },

    /// Misuse of the checks or their configuration (maps to HTTP 500).
    #[error("{}: Invalid use of parameter checks: {detail}", messages::INVALID_USAGE)]
    InvalidUsage { detail: String },
}

impl Error {
    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingArgument { .. } | Error::MissingArrayElement { .. } => {
                ErrorKind::MissingArgument
            }
            Error::NullReference { .. } => ErrorKind::NullReference,
            Error::EmptyArgument { .. } => ErrorKind::EmptyArgument,
            Error::InvalidUsage { .. } => ErrorKind::InvalidUsage,
        }
    }

    /// Catalog id of the message this error renders.
    pub fn message_id(&self) -> MessageId {
        match self {
            Error::MissingArgument { .. } => messages::ARGUMENT_CANNOT_BE_NULL,
            Error::NullReference { .. } => messages::ARGUMENT_CANNOT_BE_NULL_STRICT,
            Error::MissingArrayElement { .. } => messages::NULL_ARRAY_PARAM,
            Error::EmptyArgument { .. } => messages::EMPTY_PARAM,
            Error::InvalidUsage { .. } => messages::INVALID_USAGE,
        }
    }

    /// Name of the offending parameter, if the error is about one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Error::MissingArgument { name }
            | Error::NullReference { name }
            | Error::MissingArrayElement { name, .. }
            | Error::EmptyArgument { name } => Some(name),
            Error::InvalidUsage { .. } => None,
        }
    }

    /// Position of the offending array element.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::MissingArrayElement { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// HTTP status a server boundary should answer with.
    ///
    /// Bad parameters are the client's fault; misuse of the checks is ours.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::MissingArgument | ErrorKind::NullReference | ErrorKind::EmptyArgument => 400,
            ErrorKind::InvalidUsage => 500,
        }
    }

    /// Build a serializable report for response bodies.
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            code: self.message_id().to_string(),
            message: self.to_string(),
            parameter: self.parameter().map(str::to_owned),
            index: self.index(),
        }
    }
}

// Convenience constructors
impl Error {
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub fn null_reference(name: impl Into<String>) -> Self {
        Self::NullReference { name: name.into() }
    }

    pub fn missing_array_element(name: impl Into<String>, index: usize) -> Self {
        Self::MissingArrayElement {
            name: name.into(),
            index,
        }
    }

    pub fn empty_argument(name: impl Into<String>) -> Self {
        Self::EmptyArgument { name: name.into() }
    }

    pub fn invalid_usage(detail: impl Into<String>) -> Self {
        Self::InvalidUsage {
            detail: detail.into(),
        }
    }
}

/// Wire form of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_carries_code_and_name() {
        let err = Error::missing_argument("handler");
        assert_eq!(err.to_string(), "PARAM000037: Argument handler cannot be null");

        let err = Error::empty_argument("path");
        assert_eq!(err.to_string(), "PARAM000040: Parameter 'path' may not be empty");
    }

    #[test]
    fn test_array_element_message_has_index() {
        let err = Error::missing_array_element("items", 3);
        let msg = err.to_string();
        assert!(msg.contains("items"));
        assert!(msg.contains('3'));
        assert_eq!(err.index(), Some(3));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Error::missing_argument("a").kind(), ErrorKind::MissingArgument);
        assert_eq!(Error::missing_array_element("a", 0).kind(), ErrorKind::MissingArgument);
        assert_eq!(Error::null_reference("a").kind(), ErrorKind::NullReference);
        assert_eq!(Error::empty_argument("a").kind(), ErrorKind::EmptyArgument);
        assert_eq!(Error::invalid_usage("x").kind(), ErrorKind::InvalidUsage);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::missing_argument("a").status_code(), 400);
        assert_eq!(Error::null_reference("a").status_code(), 400);
        assert_eq!(Error::empty_argument("a").status_code(), 400);
        assert_eq!(Error::invalid_usage("bad config").status_code(), 500);
    }

    #[test]
    fn test_report_json() {
        let report = Error::missing_array_element("items", 2).to_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "missing_argument",
                "code": "PARAM000039",
                "message": "PARAM000039: Array index 2 of parameter 'items' may not be null",
                "parameter": "items",
                "index": 2,
            })
        );

        // Optional fields are omitted when absent
        let report = Error::invalid_usage("unknown log level").to_report();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("parameter").is_none());
        assert!(json.get("index").is_none());
    }
}
