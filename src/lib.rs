//! # param-check - Parameter validation helpers
//!
//! Small, stateless checks for the boundaries of a server:
//! - Presence checks for `Option` parameters, in an illegal-argument and a
//!   strict null-reference flavour
//! - Presence checks for array elements, reporting the offending index
//! - Emptiness checks over text, containers, mappings, slices and arrays
//!
//! Each check returns its input unchanged on success, or a categorized
//! [`Error`] whose message comes from the catalog in [`messages`]:
//!
//! ```
//! use param_check::{check_not_empty, check_not_null, ErrorKind};
//!
//! assert_eq!(check_not_null("port", Some(8080)).unwrap(), 8080);
//!
//! let err = check_not_empty("path", "").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::EmptyArgument);
//! assert_eq!(err.status_code(), 400);
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

#[macro_use]
mod macros;

pub mod emptiness;
pub mod messages;
pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use emptiness::Emptiness;
pub use types::{Config, Error, ErrorKind, ErrorReport, Result};
pub use validation::{
    check_all_not_null, check_not_empty, check_not_null, check_not_null_array_element,
    check_not_null_strict, check_present_not_empty,
};
