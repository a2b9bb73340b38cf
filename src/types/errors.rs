use crate::types::{ErrorVec, FieldError};
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of [`FieldError`]s produced by one validation run.
///
/// Insertion order is the order the validators ran in, and duplicate names are
/// kept. Lookups by name are linear scans that stop at the first match, so
/// [`Errors::on`] always reports the error of the earliest failing check.
///
/// # Examples
///
/// ```
/// use field_rail::{Errors, FieldError};
///
/// let errors: Errors = [
///     FieldError::new("a", "first"),
///     FieldError::new("a", "second"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(errors.has("a"));
/// assert_eq!(errors.on("a"), "first");
/// assert_eq!(errors.on("z"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Errors {
    items: ErrorVec<FieldError>,
}

impl Errors {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Returns `true` if at least one error carries `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.items.iter().any(|e| e.name() == name)
    }

    /// Message of the first error named `name`, or `""` when there is none.
    ///
    /// An error with an empty message is indistinguishable from no error here;
    /// use [`Errors::has`] when the difference matters.
    #[must_use]
    pub fn on(&self, name: &str) -> &str {
        self.items
            .iter()
            .find(|e| e.name() == name)
            .map(FieldError::message)
            .unwrap_or_default()
    }

    /// Returns `result` if `name` failed, `""` otherwise.
    ///
    /// Meant for templates, e.g. picking a CSS class for a form field.
    ///
    /// ```
    /// use field_rail::{Errors, FieldError};
    ///
    /// let errors: Errors = [FieldError::new("email", "bad")].into_iter().collect();
    /// assert_eq!(errors.if_has_then("email", "has-error"), "has-error");
    /// assert_eq!(errors.if_has_then("name", "has-error"), "");
    /// ```
    #[must_use]
    pub fn if_has_then<'r>(&self, name: &str, result: &'r str) -> &'r str {
        if self.has(name) {
            result
        } else {
            ""
        }
    }

    /// Every message recorded under `name`, in insertion order.
    pub fn all_on<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.items
            .iter()
            .filter(move |e| e.name() == name)
            .map(FieldError::message)
    }

    /// Distinct error names in the order they first appeared.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.items.len());
        for error in &self.items {
            if !names.contains(&error.name()) {
                names.push(error.name());
            }
        }
        names
    }

    /// Error at `index` in insertion order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&FieldError> {
        self.items.get(index)
    }

    /// Returns `true` if no check failed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded errors, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the errors in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.items.iter()
    }

    /// Consumes the collection and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<FieldError> {
        self.items
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl From<ErrorVec<FieldError>> for Errors {
    fn from(items: ErrorVec<FieldError>) -> Self {
        Self { items }
    }
}

impl From<Vec<FieldError>> for Errors {
    fn from(items: Vec<FieldError>) -> Self {
        Self {
            items: ErrorVec::from_vec(items),
        }
    }
}

impl FromIterator<FieldError> for Errors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldError> for Errors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = FieldError;
    type IntoIter = smallvec::IntoIter<[FieldError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
