use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single failed check: which validation failed and what to tell the user.
///
/// `name` is the stable key presentation code looks errors up by
/// (`"email_presence"`, `"password_length"`, ...). `message` is free text and
/// may be empty.
///
/// # Examples
///
/// ```
/// use field_rail::FieldError;
///
/// let err = FieldError::new("email_presence", "Email is required");
/// assert_eq!(err.name(), "email_presence");
/// assert_eq!(err.to_string(), "email_presence: Email is required");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldError {
    name: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl FieldError {
    /// Creates an error for the check `name` with the given `message`.
    #[inline]
    pub fn new<N, M>(name: N, message: M) -> Self
    where
        N: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Key of the check that produced this error.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User-facing text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for FieldError {}
