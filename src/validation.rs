//! Parameter validation checks.
//!
//! Every check first validates the parameter name itself (an empty name is a
//! bug in the caller and is reported against the label `"name"`), then the
//! value. On success the value is handed back unchanged, so a check can guard
//! an assignment inline:
//!
//! ```
//! use param_check::{check_not_empty, check_not_null};
//!
//! fn bind(host: &str, port: Option<u16>) -> param_check::Result<(String, u16)> {
//!     let host = check_not_empty("host", host)?;
//!     let port = check_not_null("port", port)?;
//!     Ok((host.to_string(), port))
//! }
//!
//! assert!(bind("localhost", Some(8080)).is_ok());
//! assert!(bind("", Some(8080)).is_err());
//! ```

use crate::emptiness::Emptiness;
use crate::messages;
use crate::types::Result;

/// Label reported when the parameter name itself is invalid.
const NAME_LABEL: &str = "name";

/// Label reported when a nullable value passed to an emptiness check is absent.
const VALUE_LABEL: &str = "value";

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(messages::argument_cannot_be_null(NAME_LABEL));
    }
    Ok(())
}

/// Check that the named parameter is present.
///
/// Fails with [`Error::MissingArgument`](crate::Error::MissingArgument).
pub fn check_not_null<T>(name: &str, value: Option<T>) -> Result<T> {
    check_name(name)?;
    value.ok_or_else(|| messages::argument_cannot_be_null(name))
}

/// Check that the named parameter is present, reporting an absent value as a
/// null reference.
///
/// For host contracts that require a null violation to be told apart from
/// other illegal arguments. An invalid `name` is still reported as
/// [`Error::MissingArgument`](crate::Error::MissingArgument).
pub fn check_not_null_strict<T>(name: &str, value: Option<T>) -> Result<T> {
    check_name(name)?;
    value.ok_or_else(|| messages::argument_cannot_be_null_strict(name))
}

/// Check that the element at `index` of the named array parameter is present.
pub fn check_not_null_array_element<T>(name: &str, index: usize, value: Option<T>) -> Result<T> {
    check_name(name)?;
    value.ok_or_else(|| messages::null_array_param(index, name))
}

/// Check every element of the named array parameter, failing on the first
/// absent one.
pub fn check_all_not_null<T, I>(name: &str, values: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    check_name(name)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| check_not_null_array_element(name, index, value))
        .collect()
}

/// Check that the named parameter is not empty.
///
/// Works for any [`Emptiness`] shape: text, containers, mappings, slices and
/// arrays, or references to them.
pub fn check_not_empty<V: Emptiness>(name: &str, value: V) -> Result<V> {
    check_name(name)?;
    if value.is_empty_value() {
        return Err(messages::empty_param(name));
    }
    Ok(value)
}

/// Check that the named parameter is both present and not empty.
///
/// An absent value is reported against the label `"value"`.
pub fn check_present_not_empty<V: Emptiness>(name: &str, value: Option<V>) -> Result<V> {
    check_name(name)?;
    let value = value.ok_or_else(|| messages::argument_cannot_be_null(VALUE_LABEL))?;
    check_not_empty(name, value)
}
