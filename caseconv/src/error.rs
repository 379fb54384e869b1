use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for caseconv operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown case '{name}'")]
    #[diagnostic(
        code(caseconv::unknown_case),
        help("valid cases are: start, pascal, camel, kebab, snake, constant")
    )]
    UnknownCase { name: String },

    #[error("unknown naming preset '{name}'")]
    #[diagnostic(
        code(caseconv::unknown_preset),
        help("valid presets are: rust, typescript")
    )]
    UnknownPreset { name: String },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse naming convention")]
    #[diagnostic(code(caseconv::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an unknown case error
    pub fn unknown_case(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownCase { name: name.into() })
    }
}
