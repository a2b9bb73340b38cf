use crate::types::Errors;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Report of one validation run: the subject that was checked plus every
/// error the checks produced.
///
/// The subject is borrowed, never copied or modified. A `Validated` has no
/// mutating methods; build a new one for each run.
///
/// # Examples
///
/// ```
/// use field_rail::{Errors, FieldError, Validated};
///
/// let subject = String::from("");
/// let errors: Errors = [FieldError::new("presence", "required")].into_iter().collect();
/// let report = Validated::new(&subject, errors);
///
/// assert!(report.has_error());
/// assert_eq!(report.errors().on("presence"), "required");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct Validated<'a, T: ?Sized> {
    object: &'a T,
    errors: Errors,
}

impl<'a, T: ?Sized> Validated<'a, T> {
    /// Pairs `object` with the errors its checks produced.
    #[inline]
    pub fn new(object: &'a T, errors: Errors) -> Self {
        Self { object, errors }
    }

    /// The subject the checks ran against.
    #[inline]
    pub fn object(&self) -> &'a T {
        self.object
    }

    /// Errors in the order the checks ran.
    #[inline]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Returns `true` if any check failed.
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the report and returns its errors.
    #[inline]
    pub fn into_errors(self) -> Errors {
        self.errors
    }

    /// Converts the report into a `Result` so callers can bail out with `?`.
    ///
    /// ```
    /// use field_rail::{Errors, Validated};
    ///
    /// let subject = 7;
    /// let report = Validated::new(&subject, Errors::new());
    /// assert_eq!(report.into_result(), Ok(&7));
    /// ```
    pub fn into_result(self) -> Result<&'a T, Errors> {
        if self.errors.is_empty() {
            Ok(self.object)
        } else {
            Err(self.errors)
        }
    }
}
