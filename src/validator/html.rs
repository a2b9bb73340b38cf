//! Guards against HTML and script injection in free-text fields.
//!
//! These are narrow denylist checks for form input, not an HTML sanitizer.
use crate::validator::{custom, Validator};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Tag fragments rejected by [`avoid_script_tag`], matched against the
/// lower-cased value.
#[rustfmt::skip]
pub static FORBIDDEN_TAGS: &[&str] = &[
    "<script", "</script>",
    "<style", "</style>",
    "<img", "</img>",
    "<embed", "</embed>",
    "<object", "</object>",
    "<video", "</video>",
    "<audio", "</audio>",
    "<source", "</source>",
    "<track", "</track>",
    "<iframe", "</iframe>",
    "<frame", "</frame>",
    "<input", "</input>",
    "<base", "</base>",
    "<applet", "</applet>",
    "<link", "</link>",
];

/// Tag fragments rejected by [`avoid_normal_html_tag`].
#[rustfmt::skip]
pub static NORMAL_FORBIDDEN_TAGS: &[&str] = &[
    "<script", "</script>",
    "<style", "</style>",
    "<img", "</img>",
    "<embed", "</embed>",
];

// Anything shaped like an opening or closing element tag. Tag names are ASCII,
// so `\w` is restricted to `[0-9A-Za-z_]`.
static TAG_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(?-u:\w)+[^>]*>").expect("tag-shape regex is valid"));

fn contains_any(value: &str, denylist: &[&str]) -> bool {
    let lowered = value.to_lowercase();
    denylist.iter().any(|fragment| lowered.contains(fragment))
}

/// Returns `true` if `value` carries no markup at all.
///
/// Blank input passes. Otherwise the trimmed value must contain none of
/// [`FORBIDDEN_TAGS`] (case-insensitive) and nothing that looks like a tag.
///
/// ```
/// use field_rail::validator::is_tag_free;
///
/// assert!(is_tag_free("  "));
/// assert!(is_tag_free("1 < 2 and 3 > 2"));
/// assert!(!is_tag_free("<IMG src=x>"));
/// assert!(!is_tag_free("hello <b>bold</b>"));
/// ```
pub fn is_tag_free(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    !contains_any(value, FORBIDDEN_TAGS) && !TAG_SHAPE.is_match(value)
}

/// Returns `true` if `value` contains none of [`NORMAL_FORBIDDEN_TAGS`].
pub fn is_free_of_normal_tags(value: &str) -> bool {
    !contains_any(value, NORMAL_FORBIDDEN_TAGS)
}

/// Fails when the value contains any HTML tag. See [`is_tag_free`].
pub fn avoid_script_tag<T, G>(
    getter: G,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    custom(move |subject: &T| is_tag_free(getter(subject)), name, message)
}

/// Fails when the value contains a script, style, img or embed tag.
/// Other markup such as `<b>` is allowed through.
///
/// ```
/// use field_rail::validator::{avoid_normal_html_tag, Validator};
///
/// let bio = avoid_normal_html_tag(|s: &str| s, "bio_html", "No scripts please");
/// assert_eq!(bio.validate("hello <script>alert(1)</script>").len(), 1);
/// assert!(bio.validate("hello <b>bold</b>").is_empty());
/// ```
pub fn avoid_normal_html_tag<T, G>(
    getter: G,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> impl Validator<T>
where
    T: ?Sized,
    G: Fn(&T) -> &str,
{
    custom(
        move |subject: &T| is_free_of_normal_tags(getter(subject)),
        name,
        message,
    )
}
