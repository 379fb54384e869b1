//! Primitive string transforms.
//!
//! Every function here is a pure, total edit over arbitrary text. Higher-level
//! conversions are built by chaining these through a [`Pipeline`](crate::Pipeline).

/// The canonical word delimiter used between pipeline stages.
pub const SPACE: &str = " ";
/// Word delimiter used by kebab-case.
pub const DASH: &str = "-";
/// Word delimiter used by snake_case and CONSTANT_CASE.
pub const UNDERSCORE: &str = "_";

/// A single-argument string transform.
///
/// Implemented for every `Fn(&str) -> String`, so plain functions and closures
/// can be used as pipeline stages directly.
pub trait Transform: Send + Sync {
    /// Apply the transform, returning a new string.
    fn apply(&self, input: &str) -> String;
}

impl<F> Transform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, input: &str) -> String {
        self(input)
    }
}

/// Map every character to its lowercase form (e.g., "Hello" -> "hello")
pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Map every character to its uppercase form (e.g., "Hello" -> "HELLO")
pub fn uppercase(s: &str) -> String {
    s.to_uppercase()
}

/// Uppercase the first character, leaving the rest untouched (e.g., "foo" -> "Foo").
///
/// The empty string is returned unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched (e.g., "FOO" -> "fOO").
///
/// The empty string is returned unchanged.
pub fn decapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Replace every non-overlapping occurrence of `target`, scanning left to right.
///
/// An empty `target` matches nothing.
pub fn replace_all(s: &str, target: &str, replacement: &str) -> String {
    if target.is_empty() {
        return s.to_string();
    }
    s.replace(target, replacement)
}

/// Build a transform that turns every `delimiter` into a single space.
pub fn strip_delimiter(delimiter: &'static str) -> impl Transform + Copy {
    move |s: &str| replace_all(s, delimiter, SPACE)
}

/// Build a transform that turns every space into `delimiter`.
pub fn insert_delimiter(delimiter: &'static str) -> impl Transform + Copy {
    move |s: &str| replace_all(s, SPACE, delimiter)
}

/// Remove all spaces (e.g., "Hello World" -> "HelloWorld")
pub fn collapse_spaces(s: &str) -> String {
    replace_all(s, SPACE, "")
}

/// Normalize both dashes and underscores to spaces.
pub fn strip_delimiters(s: &str) -> String {
    let s = strip_delimiter(DASH).apply(s);
    strip_delimiter(UNDERSCORE).apply(&s)
}

/// Capitalize every space-separated fragment (e.g., "foo bar" -> "Foo Bar").
///
/// Fragment count and order are preserved, including the empty fragments
/// produced by consecutive spaces.
pub fn capitalize_words(s: &str) -> String {
    s.split(SPACE)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(SPACE)
}
