//! Checks over a string field extracted by a value getter.
//!
//! Lengths are measured in UTF-8 bytes (`str::len`), and blankness uses
//! `str::trim`, which strips Unicode whitespace including the ideographic
//! space U+3000.
use crate::validator::{custom, Validator};
use regex::Regex;
use std::borrow::Cow;

/// Fails when the value does not match `pattern`.
///
/// ```
/// use field_rail::validator::{regexp, Validator};
/// use regex::Regex;
///
/// let digits = Regex::new(r"^[0-9]+$").unwrap();
/// let zip = regexp(|s: &String| s.as_str(), digits, "zip", "digits only");
/// assert!(zip.validate(&"123".to_string()).is_empty());
/// assert_eq!(zip.validate(&"12a".to_string()).len(), 1);
/// ```
pub fn regexp<T, G>(
    getter: G,
    pattern: Regex,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    custom(
        move |subject: &T| pattern.is_match(getter(subject)),
        name,
        message,
    )
}

/// Same as [`regexp`], compiling `pattern` first.
///
/// # Errors
///
/// Returns the [`regex::Error`] when `pattern` is not a valid expression.
pub fn regexp_pattern<T, G>(
    getter: G,
    pattern: &str,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Result<impl Validator<T>, regex::Error>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    let pattern = Regex::new(pattern)?;
    Ok(regexp(getter, pattern, name, message))
}

/// Fails when the value is empty or whitespace only.
pub fn presence<T, G>(
    getter: G,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    custom(
        move |subject: &T| !getter(subject).trim().is_empty(),
        name,
        message,
    )
}

/// Fails when the value's length lies outside `min..=max`.
///
/// ```
/// use field_rail::validator::{limitation, Validator};
///
/// let nick = limitation(|s: &str| s, 2, 5, "nick_length", "2 to 5 characters");
/// assert_eq!(nick.validate("a").len(), 1);
/// assert!(nick.validate("abcde").is_empty());
/// ```
pub fn limitation<T, G>(
    getter: G,
    min: usize,
    max: usize,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    custom(
        move |subject: &T| (min..=max).contains(&getter(subject).len()),
        name,
        message,
    )
}

/// Fails when the value's length lies inside `min..=max`; the complement of
/// [`limitation`] over the same bounds.
pub fn prohibition<T, G>(
    getter: G,
    min: usize,
    max: usize,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    custom(
        move |subject: &T| !(min..=max).contains(&getter(subject).len()),
        name,
        message,
    )
}
