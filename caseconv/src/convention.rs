//! Naming conventions for generated identifiers.
//!
//! A [`NamingConvention`] maps each identifier [`Role`] to the [`Case`] it is
//! rendered in. Conventions come from the built-in presets or from a TOML
//! document:
//!
//! ```toml
//! [naming]
//! preset = "typescript"
//! file = "snake"
//! ```

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Case, Error, Result};

/// Filename reported in diagnostics when parsing from a string.
pub const DEFAULT_FILENAME: &str = "caseconv.toml";

/// The kind of identifier being named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Type names (structs, classes, interfaces)
    Type,
    /// Field and variable names
    Field,
    /// File and module names
    File,
    /// Constant names
    Constant,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 4] = [Role::Type, Role::Field, Role::File, Role::Constant];

    /// Returns the role identifier as used in the `[naming]` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Type => "type",
            Role::Field => "field",
            Role::File => "file",
            Role::Constant => "constant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-role casing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingConvention {
    /// Case for type names (e.g., "hello-world" -> "HelloWorld")
    pub type_name: Case,
    /// Case for field names
    pub field: Case,
    /// Case for file names (e.g., "hello-world" -> "hello_world")
    pub file: Case,
    /// Case for constants
    pub constant: Case,
}

impl NamingConvention {
    /// Rust naming conventions.
    pub const RUST: NamingConvention = NamingConvention {
        type_name: Case::Pascal,
        field: Case::Snake,
        file: Case::Snake,
        constant: Case::Constant,
    };

    /// TypeScript naming conventions.
    pub const TYPESCRIPT: NamingConvention = NamingConvention {
        type_name: Case::Pascal,
        field: Case::Camel,
        file: Case::Kebab,
        constant: Case::Constant,
    };

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::RUST),
            "typescript" | "ts" => Ok(Self::TYPESCRIPT),
            _ => Err(Box::new(Error::UnknownPreset {
                name: name.to_string(),
            })),
        }
    }

    /// The case used for `role`.
    pub fn case_for(&self, role: Role) -> Case {
        match role {
            Role::Type => self.type_name,
            Role::Field => self.field,
            Role::File => self.file,
            Role::Constant => self.constant,
        }
    }

    /// Render `name` for the given role.
    pub fn name(&self, role: Role, name: &str) -> String {
        self.case_for(role).convert(name)
    }

    /// Transform for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.name(Role::Type, name)
    }

    /// Transform for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        self.name(Role::Field, name)
    }

    /// Transform for use as a file name.
    pub fn file_name(&self, name: &str) -> String {
        self.name(Role::File, name)
    }

    /// Transform for use as a constant name.
    pub fn constant_name(&self, name: &str) -> String {
        self.name(Role::Constant, name)
    }

    /// Parse a convention from a TOML file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    /// Parse a convention from TOML with a custom filename for error reporting.
    pub fn from_toml(content: &str, filename: &str) -> Result<Self> {
        let file: ConventionFile =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        let convention = file.naming.resolve()?;
        tracing::debug!(filename, ?convention, "loaded naming convention");
        Ok(convention)
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::RUST
    }
}

impl FromStr for NamingConvention {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml(s, DEFAULT_FILENAME)
    }
}

/// Root of a convention file. Other top-level tables are ignored so the
/// `[naming]` table can live inside a larger config file.
#[derive(Debug, Default, Deserialize)]
struct ConventionFile {
    #[serde(default)]
    naming: NamingTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamingTable {
    preset: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<Case>,
    field: Option<Case>,
    file: Option<Case>,
    constant: Option<Case>,
}

impl NamingTable {
    /// Apply explicit keys on top of the preset (or the default).
    fn resolve(self) -> Result<NamingConvention> {
        let base = match self.preset.as_deref() {
            Some(name) => NamingConvention::preset(name)?,
            None => NamingConvention::default(),
        };
        Ok(NamingConvention {
            type_name: self.type_name.unwrap_or(base.type_name),
            field: self.field.unwrap_or(base.field),
            file: self.file.unwrap_or(base.file),
            constant: self.constant.unwrap_or(base.constant),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_preset() {
        let naming = NamingConvention::RUST;
        assert_eq!(naming.type_name("hello-world"), "HelloWorld");
        assert_eq!(naming.field_name("hello-world"), "hello_world");
        assert_eq!(naming.file_name("hello-world"), "hello_world");
        assert_eq!(naming.constant_name("hello-world"), "HELLO_WORLD");
    }

    #[test]
    fn test_typescript_preset() {
        let naming = NamingConvention::TYPESCRIPT;
        assert_eq!(naming.type_name("user_profile"), "UserProfile");
        assert_eq!(naming.field_name("user_profile"), "userProfile");
        assert_eq!(naming.file_name("user_profile"), "user-profile");
        assert_eq!(naming.name(Role::Constant, "max retries"), "MAX_RETRIES");
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(NamingConvention::preset("ts").unwrap(), NamingConvention::TYPESCRIPT);
        assert_eq!(NamingConvention::preset("Rust").unwrap(), NamingConvention::RUST);
        assert!(matches!(
            *NamingConvention::preset("go").unwrap_err(),
            Error::UnknownPreset { .. }
        ));
    }

    #[test]
    fn test_empty_document_is_default() {
        let naming: NamingConvention = "".parse().unwrap();
        assert_eq!(naming, NamingConvention::default());
    }

    #[test]
    fn test_keys_override_preset() {
        let naming: NamingConvention = r#"
            [naming]
            preset = "typescript"
            file = "snake_case"
            "#
        .parse()
        .unwrap();

        assert_eq!(naming.file, Case::Snake);
        assert_eq!(naming.field, Case::Camel);
        assert_eq!(naming.case_for(Role::Type), Case::Pascal);
    }

    #[test]
    fn test_other_tables_are_ignored() {
        let naming: NamingConvention = r#"
            [package]
            name = "demo"

            [naming]
            constant = "kebab"
            "#
        .parse()
        .unwrap();

        assert_eq!(naming.constant, Case::Kebab);
    }

    #[test]
    fn test_unknown_case_is_parse_error() {
        let err = NamingConvention::from_str("[naming]\ntype = \"dotted\"\n").unwrap_err();
        match *err {
            Error::Parse { source, .. } => {
                assert!(source.message().contains("unknown case 'dotted'"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = NamingConvention::from_str("[naming]\nmethod = \"camel\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_preset_in_document() {
        let err = NamingConvention::from_str("[naming]\npreset = \"cobol\"\n").unwrap_err();
        assert!(matches!(*err, Error::UnknownPreset { ref name } if name == "cobol"));
    }

    #[test]
    fn test_role_names() {
        let names: Vec<_> = Role::ALL.iter().map(Role::to_string).collect();
        assert_eq!(names, ["type", "field", "file", "constant"]);
    }
}
