//! Shorthand macros that take the parameter name from the variable.
//!
//! ```
//! use param_check::{check_not_empty, check_not_null};
//!
//! fn route(path: &str, handler: Option<fn()>) -> param_check::Result<()> {
//!     let _path = check_not_empty!(path)?;
//!     let _handler = check_not_null!(handler)?;
//!     Ok(())
//! }
//!
//! let err = route("", None).unwrap_err();
//! assert_eq!(err.parameter(), Some("path"));
//! ```

/// Check that an `Option` parameter is present, naming it after the variable.
///
/// `check_not_null!(port)` expands to `check_not_null("port", port)`; the
/// explicit `check_not_null!("port", port)` form is accepted too.
#[macro_export]
macro_rules! check_not_null {
    ($value:ident) => {
        $crate::validation::check_not_null(stringify!($value), $value)
    };
    ($name:expr, $value:expr $(,)?) => {
        $crate::validation::check_not_null($name, $value)
    };
}

/// Check that a parameter is not empty, naming it after the variable.
#[macro_export]
macro_rules! check_not_empty {
    ($value:ident) => {
        $crate::validation::check_not_empty(stringify!($value), $value)
    };
    ($name:expr, $value:expr $(,)?) => {
        $crate::validation::check_not_empty($name, $value)
    };
}

#[cfg(test)]
mod tests {
    use crate::types::Error;
    use std::collections::HashMap;

    #[test]
    fn test_name_from_identifier() {
        let handler: Option<&str> = None;
        let err = check_not_null!(handler).unwrap_err();
        assert_eq!(err, Error::missing_argument("handler"));

        let headers: HashMap<String, String> = HashMap::new();
        let err = check_not_empty!(headers).unwrap_err();
        assert_eq!(err, Error::empty_argument("headers"));
    }

    #[test]
    fn test_explicit_name() {
        assert_eq!(check_not_null!("port", Some(8080)).unwrap(), 8080);
        assert_eq!(check_not_empty!("ids", vec![1, 2]).unwrap(), vec![1, 2]);
    }
}
