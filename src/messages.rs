//! Message catalog for parameter check failures.
//!
//! Each failure the checks can report has a stable [`MessageId`]. The catalog
//! functions build the matching [`Error`]; the text itself is rendered by the
//! error's `Display` impl so the id and wording cannot drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Error;

/// Stable numeric id of a catalog message, rendered as `PARAM000037`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(u16);

impl MessageId {
    pub const PREFIX: &'static str = "PARAM";

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:06}", Self::PREFIX, self.0)
    }
}

pub const ARGUMENT_CANNOT_BE_NULL: MessageId = MessageId::new(37);
pub const ARGUMENT_CANNOT_BE_NULL_STRICT: MessageId = MessageId::new(38);
pub const NULL_ARRAY_PARAM: MessageId = MessageId::new(39);
pub const EMPTY_PARAM: MessageId = MessageId::new(40);
pub const INVALID_USAGE: MessageId = MessageId::new(41);

/// "Argument {name} cannot be null"
pub fn argument_cannot_be_null(name: &str) -> Error {
    rejected(Error::missing_argument(name))
}

/// "Argument {name} cannot be null (null reference)"
pub fn argument_cannot_be_null_strict(name: &str) -> Error {
    rejected(Error::null_reference(name))
}

/// "Array index {index} of parameter '{name}' may not be null"
pub fn null_array_param(index: usize, name: &str) -> Error {
    rejected(Error::missing_array_element(name, index))
}

/// "Parameter '{name}' may not be empty"
pub fn empty_param(name: &str) -> Error {
    rejected(Error::empty_argument(name))
}

/// "Invalid use of parameter checks: {detail}"
pub fn invalid_usage(detail: impl Into<String>) -> Error {
    rejected(Error::invalid_usage(detail))
}

fn rejected(err: Error) -> Error {
    tracing::debug!(
        code = %err.message_id(),
        kind = ?err.kind(),
        parameter = err.parameter().unwrap_or_default(),
        "parameter_rejected"
    );
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use tracing_test::traced_test;

    #[test]
    fn test_message_id_display() {
        assert_eq!(ARGUMENT_CANNOT_BE_NULL.to_string(), "PARAM000037");
        assert_eq!(MessageId::new(1234).to_string(), "PARAM001234");
        assert_eq!(EMPTY_PARAM.get(), 40);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = vec![
            ARGUMENT_CANNOT_BE_NULL,
            ARGUMENT_CANNOT_BE_NULL_STRICT,
            NULL_ARRAY_PARAM,
            EMPTY_PARAM,
            INVALID_USAGE,
        ];
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_catalog_builds_matching_errors() {
        let err = argument_cannot_be_null("port");
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
        assert_eq!(err.message_id(), ARGUMENT_CANNOT_BE_NULL);

        let err = argument_cannot_be_null_strict("port");
        assert_eq!(err.kind(), ErrorKind::NullReference);
        assert_eq!(err.message_id(), ARGUMENT_CANNOT_BE_NULL_STRICT);

        let err = null_array_param(7, "items");
        assert_eq!(err.message_id(), NULL_ARRAY_PARAM);
        assert_eq!(err.index(), Some(7));

        let err = empty_param("path");
        assert_eq!(err.message_id(), EMPTY_PARAM);

        let err = invalid_usage("bad level");
        assert_eq!(err.message_id(), INVALID_USAGE);
        assert!(err.to_string().ends_with("bad level"));
    }

    #[test]
    #[traced_test]
    fn test_rejection_is_traced() {
        let _ = empty_param("headers");
        assert!(logs_contain("parameter_rejected"));
        assert!(logs_contain("PARAM000040"));
        assert!(logs_contain("headers"));
    }
}
