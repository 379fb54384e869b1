//! Named case converters.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Error,
    pipeline::Pipeline,
    transform::{
        DASH, UNDERSCORE, capitalize_words, collapse_spaces, decapitalize_first,
        insert_delimiter, lowercase, strip_delimiters, uppercase,
    },
};

/// Supported identifier casing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `Start Case`
    Start,
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
    /// `kebab-case`
    Kebab,
    /// `snake_case`
    Snake,
    /// `CONSTANT_CASE`
    Constant,
}

impl Case {
    /// All cases, in declaration order.
    pub const ALL: [Case; 6] = [
        Case::Start,
        Case::Pascal,
        Case::Camel,
        Case::Kebab,
        Case::Snake,
        Case::Constant,
    ];

    /// Returns the case identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Start => "start",
            Case::Pascal => "pascal",
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Snake => "snake",
            Case::Constant => "constant",
        }
    }

    /// Build the transform pipeline for this case.
    ///
    /// Pascal and camel case reuse the start and Pascal pipelines as their
    /// first stage.
    pub fn pipeline(self) -> Pipeline {
        match self {
            Case::Start => Pipeline::new()
                .then(strip_delimiters)
                .then(capitalize_words),
            Case::Pascal => Pipeline::new()
                .then(Case::Start.pipeline())
                .then(collapse_spaces),
            Case::Camel => Pipeline::new()
                .then(Case::Pascal.pipeline())
                .then(decapitalize_first),
            Case::Kebab => Pipeline::new()
                .then(lowercase)
                .then(strip_delimiters)
                .then(insert_delimiter(DASH)),
            Case::Snake => Pipeline::new()
                .then(lowercase)
                .then(strip_delimiters)
                .then(insert_delimiter(UNDERSCORE)),
            Case::Constant => Pipeline::new()
                .then(uppercase)
                .then(strip_delimiters)
                .then(insert_delimiter(UNDERSCORE)),
        }
    }

    /// Convert `s` to this case.
    pub fn convert(self, s: &str) -> String {
        self.pipeline().apply(s)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Case {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "kebab-case", "Start Case" and "CONSTANT_CASE" all normalize to "<name>_case".
        let normalized = to_snake_case(s.trim());
        let name = normalized
            .strip_suffix("_case")
            .or_else(|| normalized.strip_suffix("case"))
            .unwrap_or(&normalized);

        match name {
            "start" | "title" => Ok(Case::Start),
            "pascal" | "upper_camel" => Ok(Case::Pascal),
            "camel" | "lower_camel" => Ok(Case::Camel),
            "kebab" => Ok(Case::Kebab),
            "snake" => Ok(Case::Snake),
            "constant" | "screaming_snake" => Ok(Case::Constant),
            _ => Err(Error::unknown_case(s)),
        }
    }
}

impl Serialize for Case {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Case {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a string to Start Case (e.g., "hello_world" -> "Hello World")
pub fn to_start_case(s: &str) -> String {
    Case::Start.convert(s)
}

/// Convert a string to PascalCase (e.g., "hello-world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    Case::Pascal.convert(s)
}

/// Convert a string to camelCase (e.g., "Hello World" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    Case::Camel.convert(s)
}

/// Convert a string to kebab-case (e.g., "hello_world" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    Case::Kebab.convert(s)
}

/// Convert a string to snake_case (e.g., "hello-world" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    Case::Snake.convert(s)
}

/// Convert a string to CONSTANT_CASE (e.g., "hello world" -> "HELLO_WORLD")
pub fn to_constant_case(s: &str) -> String {
    Case::Constant.convert(s)
}
