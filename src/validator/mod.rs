//! The [`Validator`] abstraction and the factories that build validators.
//!
//! A validator is a pure check over a subject `T`: it returns no errors when
//! the check passes and exactly one [`FieldError`] when it fails. Factories
//! close over their configuration (name, message, bounds, patterns) and never
//! change it afterwards.
//!
//! Getter-based factories take a *value getter*: any `Fn(&T) -> &str` that
//! projects the inspected field out of the subject.
//!
//! # Examples
//!
//! ```
//! use field_rail::validator::{custom, presence, Validator};
//!
//! struct Signup {
//!     email: String,
//!     age: u32,
//! }
//!
//! let email = presence(|s: &Signup| s.email.as_str(), "email_presence", "Email is required");
//! let adult = custom(|s: &Signup| s.age >= 18, "age", "Must be 18 or older");
//!
//! let signup = Signup { email: "  ".into(), age: 21 };
//! assert_eq!(email.validate(&signup).len(), 1);
//! assert!(adult.validate(&signup).is_empty());
//! ```
use crate::types::{ErrorVec, FieldError};
use smallvec::smallvec;
use std::borrow::Cow;

pub mod html;
pub mod string;

pub use html::*;
pub use string::*;

/// A pure check over a subject of type `T`.
///
/// Implemented for every `Fn(&T) -> ErrorVec<FieldError>`, so plain closures
/// are validators too.
pub trait Validator<T: ?Sized> {
    /// Runs the check. An empty vector means the subject passed.
    fn validate(&self, subject: &T) -> ErrorVec<FieldError>;
}

impl<T, F> Validator<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> ErrorVec<FieldError>,
{
    #[inline]
    fn validate(&self, subject: &T) -> ErrorVec<FieldError> {
        self(subject)
    }
}

/// Fails with `name`/`message` whenever `predicate` returns `false`.
///
/// Every other factory in this module is built on top of this one,
/// [`message_switcher`] or [`dynamic_message`].
///
/// ```
/// use field_rail::validator::{custom, Validator};
///
/// let even = custom(|n: &i32| n % 2 == 0, "even", "must be even");
/// assert!(even.validate(&4).is_empty());
/// assert_eq!(even.validate(&3)[0].message(), "must be even");
/// ```
pub fn custom<T, P>(
    predicate: P,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    let name = name.into();
    let message = message.into();
    move |subject: &T| -> ErrorVec<FieldError> {
        if predicate(subject) {
            ErrorVec::new()
        } else {
            smallvec![FieldError::new(name.clone(), message.clone())]
        }
    }
}

/// Lets the check pick its own message: an empty message means the subject
/// passed, anything else is reported under `name`.
///
/// ```
/// use field_rail::validator::{message_switcher, Validator};
///
/// let age = message_switcher(
///     |age: &u32| match *age {
///         0..=12 => "too young",
///         13..=120 => "",
///         _ => "not a realistic age",
///     },
///     "age",
/// );
/// assert!(age.validate(&30).is_empty());
/// assert_eq!(age.validate(&200)[0].message(), "not a realistic age");
/// ```
pub fn message_switcher<T, F, M>(switch: F, name: impl Into<Cow<'static, str>>) -> impl Validator<T>
where
    T: ?Sized,
    F: Fn(&T) -> M,
    M: Into<Cow<'static, str>>,
{
    let name = name.into();
    move |subject: &T| -> ErrorVec<FieldError> {
        let message = switch(subject).into();
        if message.is_empty() {
            ErrorVec::new()
        } else {
            smallvec![FieldError::new(name.clone(), message)]
        }
    }
}

/// Decides both the name and the message at check time.
///
/// `check` returns `Ok(())` when the subject passes, or the error to report.
///
/// ```
/// use field_rail::validator::{dynamic_message, Validator};
/// use field_rail::FieldError;
///
/// let range = dynamic_message(|n: &i64| match *n {
///     n if n < 0 => Err(FieldError::new("too_small", "must not be negative")),
///     n if n > 100 => Err(FieldError::new("too_large", format!("{n} exceeds 100"))),
///     _ => Ok(()),
/// });
/// assert!(range.validate(&50).is_empty());
/// assert_eq!(range.validate(&101)[0].name(), "too_large");
/// ```
pub fn dynamic_message<T, F>(check: F) -> impl Validator<T>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), FieldError>,
{
    move |subject: &T| -> ErrorVec<FieldError> {
        match check(subject) {
            Ok(()) => ErrorVec::new(),
            Err(error) => smallvec![error],
        }
    }
}
