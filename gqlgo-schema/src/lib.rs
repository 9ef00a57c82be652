//! # gqlgo Schema
//!
//! GraphQL introspection model and generator configuration.
//!
//! This crate provides:
//! - Type definitions for introspection documents (`__schema`)
//! - The generator configuration model (scalar and type overrides)
//! - JSON parsing for both documents
//! - Structural schema validation

pub mod config;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use config::{Config, FieldConfig, ScalarConfig, TypeConfig};
pub use error::{ParseError, SchemaError};
pub use parser::{parse_config, parse_config_file, parse_introspection, parse_introspection_file};
pub use types::{EnumValue, Field, RootType, Schema, SchemaType, TypeKind};
pub use validation::validate_schema;
