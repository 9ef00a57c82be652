//! # gqlgo Codegen
//!
//! Go code generation from GraphQL introspection documents.
//!
//! This crate provides:
//! - Go type name resolution with configurable scalar and type overrides
//! - Struct, interface, union, enum and scalar declaration generation
//! - `__typename`-driven JSON decoders for interfaces and unions
//! - Placement of declarations into output files and file rendering

pub mod error;
pub mod generator;
pub mod golang;
pub mod output;
pub mod placement;
pub mod resolver;
pub mod sink;

pub use error::CodegenError;
pub use generator::{DEFAULT_PACKAGE, Generator};
pub use output::{OutputFile, OutputFiles};
pub use sink::{DirectorySink, MemorySink, OutputSink};

/// Generates Go files from an introspection document and a configuration.
///
/// # Arguments
/// * `schema_json` - Introspection JSON content
/// * `config_json` - Generator configuration JSON content
/// * `package` - Go package name of the generated files
///
/// # Returns
/// The generated files, keyed by file name in first-use order.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_json(
    schema_json: &str,
    config_json: &str,
    package: &str,
) -> Result<OutputFiles, CodegenError> {
    let schema = gqlgo_schema::parse_introspection(schema_json)?;
    let config = gqlgo_schema::parse_config(config_json)?;
    Generator::new(&schema, &config)
        .with_package(package)
        .generate()
}

/// Generates Go files from an introspection file and a configuration file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation
/// fails.
pub fn generate_from_files(
    schema_path: &std::path::Path,
    config_path: &std::path::Path,
    package: &str,
) -> Result<OutputFiles, CodegenError> {
    let schema_json = std::fs::read_to_string(schema_path)?;
    let config_json = std::fs::read_to_string(config_path)?;
    generate_from_json(&schema_json, &config_json, package)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_json() {
        let schema = r#"{
            "__schema": {
                "types": [
                    { "kind": "SCALAR", "name": "URI" },
                    {
                        "kind": "OBJECT",
                        "name": "Repository",
                        "fields": [
                            { "name": "url", "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "URI" } } }
                        ]
                    }
                ]
            }
        }"#;
        let config = r#"{ "scalars": { "URI": { "type": "string" } } }"#;

        let files = generate_from_json(schema, config, "github").expect("Failed to generate");

        let scalars = files.file("scalars.go").expect("scalars.go missing");
        assert_eq!(scalars.render(), "package github\n\ntype URI string\n");
        let types = files.file("types.go").expect("types.go missing");
        assert!(types.chunks[0].contains("\tUrl URI `json:\"url\"`\n"));
    }

    #[test]
    fn test_generate_from_json_reports_parse_errors() {
        let err = generate_from_json("{", "{}", "github").expect_err("Should fail");
        assert!(matches!(err, CodegenError::Parse(_)));
    }

    #[test]
    fn test_generate_from_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema_path = dir.path().join("schema.json");
        let config_path = dir.path().join("config.json");
        std::fs::write(
            &schema_path,
            r#"{ "types": [ { "kind": "ENUM", "name": "Color", "enumValues": [ { "name": "RED" } ] } ] }"#,
        )
        .expect("Failed to write schema");
        std::fs::write(&config_path, "{}").expect("Failed to write config");

        let files =
            generate_from_files(&schema_path, &config_path, "paint").expect("Failed to generate");
        let enums = files.file("enums.go").expect("enums.go missing");
        assert!(enums.render().contains("\tColor_RED Color = \"RED\"\n"));
    }
}
