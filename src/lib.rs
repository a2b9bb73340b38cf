//! Composable field validation that collects every failure instead of
//! stopping at the first one.
//!
//! A [`Validator`] is a pure check over a subject. Factories in
//! [`validator`] build validators from value getters and parameters, each
//! bound to one stable error name. Running a batch produces a [`Validated`]
//! report whose [`Errors`] answer the questions presentation code asks:
//! did `"email_presence"` fail, and with what message?
//!
//! # Examples
//!
//! ## Validating a form
//!
//! ```
//! use field_rail::prelude::*;
//!
//! struct Signup {
//!     email: String,
//!     nickname: String,
//! }
//!
//! let rules = Rules::new()
//!     .with(presence(|s: &Signup| s.email.as_str(), "email_presence", "Email is required"))
//!     .with(limitation(|s: &Signup| s.nickname.as_str(), 2, 16, "nickname_length", "2 to 16 characters"))
//!     .with(avoid_script_tag(|s: &Signup| s.nickname.as_str(), "nickname_html", "No markup please"));
//!
//! let signup = Signup { email: " ".into(), nickname: "<b>x</b>".into() };
//! let report = rules.validate(&signup);
//!
//! assert!(report.has_error());
//! assert_eq!(report.errors().on("email_presence"), "Email is required");
//! assert_eq!(report.errors().if_has_then("nickname_html", "is-invalid"), "is-invalid");
//! assert!(!report.errors().has("nickname_length"));
//! ```
//!
//! ## Propagating a failed report
//!
//! ```
//! use field_rail::prelude::*;
//!
//! fn accept(nickname: &str) -> Result<&str, Errors> {
//!     Rules::new()
//!         .with(presence(|s: &str| s, "presence", "required"))
//!         .validate(nickname)
//!         .into_result()
//! }
//!
//! assert_eq!(accept("ann"), Ok("ann"));
//! assert!(accept("").is_err());
//! ```

/// Convenience re-exports for quick starts
pub mod prelude;
/// Running validator batches
pub mod rules;
/// FieldError, Errors and Validated
pub mod types;
/// Validator trait and factories
pub mod validator;

pub use rules::{validate_all, Rules};
pub use types::{ErrorVec, Errors, FieldError, Validated};
pub use validator::Validator;
