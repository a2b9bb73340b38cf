//! Result vocabulary of a validation run.
//!
//! - [`FieldError`]: one failed check, keyed by name
//! - [`Errors`]: ordered errors of a run with name lookups
//! - [`Validated`]: the subject paired with its errors
//!
//! # Examples
//!
//! ```
//! use field_rail::{Errors, FieldError, Validated};
//!
//! let name = String::from("   ");
//! let mut errors = Errors::new();
//! errors.extend([FieldError::new("name_presence", "Name can't be blank")]);
//!
//! let report = Validated::new(&name, errors);
//! assert!(report.has_error());
//! assert!(report.errors().has("name_presence"));
//! ```
use smallvec::SmallVec;

pub mod errors;
pub mod field_error;
pub mod validated;

pub use errors::*;
pub use field_error::*;
pub use validated::*;

/// SmallVec-backed collection returned by a single validator.
///
/// Uses inline storage for one element: a check yields at most one error, so
/// neither the passing nor the failing path allocates.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
