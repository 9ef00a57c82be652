//! Generator configuration.
//!
//! The configuration overrides how scalars and named types are spelled in
//! the generated Go package and where their declarations are written. Keys
//! are accepted lower-case and capitalised (`types` or `Types`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Override for a single field of a type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Exposed Go identifier for the field.
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    /// Import path required by `type`.
    #[serde(default, alias = "Import")]
    pub import: Option<String>,
    /// Go type of the field, used verbatim.
    #[serde(default, alias = "Type")]
    pub r#type: Option<String>,
}

/// Override for a named type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Go name of the type.
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    /// Import path for the package providing `type`.
    #[serde(default, alias = "Import")]
    pub import: Option<String>,
    /// Existing Go type to use instead of generating one.
    #[serde(default, alias = "Type")]
    pub r#type: Option<String>,
    /// File into which the declaration should be written.
    #[serde(default, alias = "File")]
    pub file: Option<String>,
    /// Per-field overrides, keyed by schema field name.
    #[serde(default, alias = "Fields")]
    pub fields: IndexMap<String, FieldConfig>,
}

/// Override for a scalar.
///
/// The scalar is replaced by a built-in type if `name` is a predeclared Go
/// identifier. Otherwise a named type backed by `type` is declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarConfig {
    /// Go name of the scalar. Optional if the scalar keeps its schema name.
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    /// Import path for the package with `type` (or with `name`, for an
    /// imported type).
    #[serde(default, alias = "Import")]
    pub import: Option<String>,
    /// Backing type. Optional if `name` is predeclared.
    #[serde(default, alias = "Type")]
    pub r#type: Option<String>,
    /// File into which the declaration should be written.
    #[serde(default, alias = "File")]
    pub file: Option<String>,
}

impl ScalarConfig {
    /// Creates a scalar config that maps onto a Go type name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a scalar config backed by a Go type.
    #[must_use]
    pub fn backed_by(ty: impl Into<String>) -> Self {
        Self {
            r#type: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Returns the configured name, treating an empty string as unset.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Returns the configured backing type, treating an empty string as unset.
    #[must_use]
    pub fn backing_type(&self) -> Option<&str> {
        non_empty(self.r#type.as_deref())
    }

    /// Returns the configured import, treating an empty string as unset.
    #[must_use]
    pub fn import(&self) -> Option<&str> {
        non_empty(self.import.as_deref())
    }

    /// Returns the configured file, treating an empty string as unset.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        non_empty(self.file.as_deref())
    }

    /// Returns true if the scalar names a type imported from another package.
    #[must_use]
    pub fn is_imported(&self) -> bool {
        self.import().is_some() && self.name().is_some() && self.backing_type().is_none()
    }
}

impl TypeConfig {
    /// Returns the configured name, treating an empty string as unset.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Returns the configured existing type, treating an empty string as unset.
    #[must_use]
    pub fn existing_type(&self) -> Option<&str> {
        non_empty(self.r#type.as_deref())
    }

    /// Returns the configured import, treating an empty string as unset.
    #[must_use]
    pub fn import(&self) -> Option<&str> {
        non_empty(self.import.as_deref())
    }

    /// Returns the configured file, treating an empty string as unset.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        non_empty(self.file.as_deref())
    }
}

impl FieldConfig {
    /// Returns the configured type, treating an empty string as unset.
    #[must_use]
    pub fn field_type(&self) -> Option<&str> {
        non_empty(self.r#type.as_deref())
    }

    /// Returns the configured name, treating an empty string as unset.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Returns the configured import, treating an empty string as unset.
    #[must_use]
    pub fn import(&self) -> Option<&str> {
        non_empty(self.import.as_deref())
    }
}

/// Complete generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides for named types.
    #[serde(default, alias = "Types")]
    pub types: IndexMap<String, TypeConfig>,
    /// Overrides for scalars.
    #[serde(default, alias = "Scalars")]
    pub scalars: IndexMap<String, ScalarConfig>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar override.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, scalar: ScalarConfig) -> Self {
        self.scalars.insert(name.into(), scalar);
        self
    }

    /// Adds a type override.
    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, ty: TypeConfig) -> Self {
        self.types.insert(name.into(), ty);
        self
    }

    /// Looks up a type override.
    #[must_use]
    pub fn type_config(&self, name: &str) -> Option<&TypeConfig> {
        self.types.get(name)
    }

    /// Looks up a per-field override.
    #[must_use]
    pub fn field_config(&self, type_name: &str, field_name: &str) -> Option<&FieldConfig> {
        self.types.get(type_name)?.fields.get(field_name)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_capitalised_keys() {
        let json = r#"{
            "Types": {
                "Repository": { "Name": "Repo", "Fields": { "id": { "Type": "RepoID" } } }
            },
            "Scalars": {
                "DateTime": { "Name": "Time", "Import": "time", "Type": "time.Time" }
            }
        }"#;

        let config: Config = serde_json::from_str(json).expect("Failed to decode");
        assert_eq!(config.types["Repository"].name(), Some("Repo"));
        assert_eq!(
            config
                .field_config("Repository", "id")
                .and_then(FieldConfig::field_type),
            Some("RepoID")
        );
        assert_eq!(config.scalars["DateTime"].import(), Some("time"));
    }

    #[test]
    fn test_accepts_camel_case_keys() {
        let json = r#"{ "scalars": { "URI": { "type": "string", "file": "uri.go" } } }"#;
        let config: Config = serde_json::from_str(json).expect("Failed to decode");
        assert_eq!(config.scalars["URI"].backing_type(), Some("string"));
        assert_eq!(config.scalars["URI"].file(), Some("uri.go"));
        assert!(config.types.is_empty());
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let scalar = ScalarConfig {
            name: Some(String::new()),
            r#type: Some("string".to_string()),
            ..ScalarConfig::default()
        };
        assert_eq!(scalar.name(), None);
        assert_eq!(scalar.backing_type(), Some("string"));
    }

    #[test]
    fn test_is_imported() {
        let imported = ScalarConfig {
            name: Some("time.Time".to_string()),
            import: Some("time".to_string()),
            ..ScalarConfig::default()
        };
        assert!(imported.is_imported());
        assert!(!ScalarConfig::named("string").is_imported());
        assert!(!ScalarConfig::backed_by("string").is_imported());
    }

    #[test]
    fn test_field_config_missing_type() {
        let config = Config::new().with_type("User", TypeConfig::default());
        assert!(config.field_config("User", "login").is_none());
        assert!(config.field_config("Bot", "login").is_none());
    }
}
