//! Running a set of validators against one subject.
//!
//! Every validator always runs; a failure never stops the batch. Errors are
//! appended in the order the validators were registered, which keeps
//! [`Errors::on`](crate::Errors::on) deterministic.
use crate::types::{Errors, Validated};
use crate::validator::Validator;

#[cfg(feature = "tracing")]
use crate::types::FieldError;

/// Runs each validator against `subject` and collects their errors.
///
/// ```
/// use field_rail::validator::{custom, presence};
/// use field_rail::validate_all;
///
/// let blank = presence(|s: &str| s, "presence", "required");
/// let short = custom(|s: &str| s.len() > 3, "length", "too short");
///
/// let report = validate_all("", [&blank as &dyn field_rail::Validator<str>, &short]);
/// assert_eq!(report.errors().len(), 2);
/// assert_eq!(report.errors().get(0).unwrap().name(), "presence");
/// ```
pub fn validate_all<'a, 'v, T, V, I>(subject: &'a T, validators: I) -> Validated<'a, T>
where
    T: ?Sized,
    V: Validator<T> + ?Sized + 'v,
    I: IntoIterator<Item = &'v V>,
{
    let mut errors = Errors::new();
    #[cfg(feature = "tracing")]
    let mut checks = 0usize;

    for validator in validators {
        let found = validator.validate(subject);
        #[cfg(feature = "tracing")]
        {
            checks += 1;
            trace_failures(&found);
        }
        errors.extend(found);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(checks, failures = errors.len(), "validation run finished");

    Validated::new(subject, errors)
}

#[cfg(feature = "tracing")]
fn trace_failures(found: &[FieldError]) {
    for error in found {
        tracing::debug!(name = %error.name(), "validation check failed");
    }
}

/// An ordered list of validators for subjects of type `T`.
///
/// # Examples
///
/// ```
/// use field_rail::validator::{limitation, presence};
/// use field_rail::Rules;
///
/// struct Login {
///     user: String,
///     password: String,
/// }
///
/// let rules = Rules::new()
///     .with(presence(|l: &Login| l.user.as_str(), "user_presence", "User is required"))
///     .with(limitation(|l: &Login| l.password.as_str(), 8, 64, "password_length", "8 to 64 characters"));
///
/// let login = Login { user: "ann".into(), password: "short".into() };
/// let report = rules.validate(&login);
///
/// assert!(report.has_error());
/// assert_eq!(report.errors().on("password_length"), "8 to 64 characters");
/// assert_eq!(report.errors().on("user_presence"), "");
/// ```
pub struct Rules<'r, T: ?Sized> {
    validators: Vec<Box<dyn Validator<T> + 'r>>,
}

impl<'r, T: ?Sized> Rules<'r, T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Appends a validator and returns the list, for chained construction.
    #[must_use]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validator<T> + 'r,
    {
        self.push(validator);
        self
    }

    /// Appends a validator in place.
    pub fn push<V>(&mut self, validator: V)
    where
        V: Validator<T> + 'r,
    {
        self.validators.push(Box::new(validator));
    }

    /// Number of registered validators.
    #[inline]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if no validator is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every validator against `subject` in registration order.
    pub fn validate<'a>(&self, subject: &'a T) -> Validated<'a, T> {
        validate_all(subject, self.validators.iter().map(|v| &**v))
    }
}

impl<T: ?Sized> Default for Rules<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, T: ?Sized> Extend<Box<dyn Validator<T> + 'r>> for Rules<'r, T> {
    fn extend<I: IntoIterator<Item = Box<dyn Validator<T> + 'r>>>(&mut self, iter: I) {
        self.validators.extend(iter);
    }
}

impl<'r, T: ?Sized> FromIterator<Box<dyn Validator<T> + 'r>> for Rules<'r, T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Validator<T> + 'r>>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Rules<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("validators", &self.validators.len())
            .finish()
    }
}
