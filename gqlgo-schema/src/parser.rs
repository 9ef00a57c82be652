//! Introspection and configuration document parsing.
//!
//! Decoding goes through `serde_path_to_error` so a malformed document
//! reports the JSON path of the value that failed.

use crate::config::Config;
use crate::error::ParseError;
use crate::types::Schema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Parses an introspection document from a string.
///
/// Accepts a full GraphQL response (`{"data": {"__schema": ...}}`), the
/// `data` object (`{"__schema": ...}`), or the schema object itself.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or no schema is found.
pub fn parse_introspection(json: &str) -> Result<Schema, ParseError> {
    let document: Value = from_str_with_path(json)?;
    from_value_with_path(extract_schema(document)?)
}

/// Parses an introspection document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_introspection_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_introspection(&json)
}

/// Parses a generator configuration from a string.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed.
pub fn parse_config(json: &str) -> Result<Config, ParseError> {
    from_str_with_path(json)
}

/// Parses a generator configuration from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_config_file(path: &Path) -> Result<Config, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_config(&json)
}

/// Locates the `__schema` object inside a response envelope.
fn extract_schema(document: Value) -> Result<Value, ParseError> {
    let Value::Object(mut object) = document else {
        return Err(ParseError::invalid_structure(
            "introspection document is not a JSON object",
        ));
    };

    if let Some(data) = object.remove("data") {
        if data.is_null() {
            let errors = object
                .get("errors")
                .map(Value::to_string)
                .unwrap_or_else(|| "no errors reported".to_string());
            return Err(ParseError::invalid_structure(format!(
                "introspection response has no data: {errors}"
            )));
        }
        return extract_schema(data);
    }

    if let Some(schema) = object.remove("__schema") {
        return Ok(schema);
    }

    if object.contains_key("types") {
        return Ok(Value::Object(object));
    }

    Err(ParseError::invalid_structure("no __schema element found"))
}

fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, ParseError> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize(&mut de).map_err(ParseError::json)?;
    de.end().map_err(|source| ParseError::Json {
        path: ".".to_string(),
        source,
    })?;
    Ok(value)
}

fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    serde_path_to_error::deserialize(value).map_err(ParseError::json)
}
