//! Schema validation utilities.
//!
//! These checks catch documents that violate the introspection contract
//! (unnamed named kinds, wrappers with nothing inside, duplicate names)
//! before any code is generated.

use crate::error::SchemaError;
use crate::types::{Schema, SchemaType};
use std::collections::HashSet;

/// Validates a parsed schema for structural correctness.
///
/// # Errors
/// Returns `SchemaError` describing the first malformed node found.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for ty in &schema.types {
        let name = validate_named(ty)?;
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateType {
                name: name.to_string(),
            });
        }
        validate_members(ty, name)?;
    }

    Ok(())
}

/// Validates a top-level type definition and returns its name.
fn validate_named(ty: &SchemaType) -> Result<&str, SchemaError> {
    if ty.kind.is_wrapper() {
        return Err(SchemaError::Validation {
            message: format!("{} wrapper cannot be a top-level type", ty.kind),
        });
    }
    ty.name().ok_or_else(|| SchemaError::UnnamedType {
        kind: ty.kind.to_string(),
    })
}

/// Validates field types, possible types and interfaces of a definition.
fn validate_members(ty: &SchemaType, name: &str) -> Result<(), SchemaError> {
    for field in ty.fields() {
        validate_reference(&field.ty, &format!("{name}.{}", field.name))?;
    }

    for possible in ty.possible_types() {
        validate_reference(possible, &format!("possible types of {name}"))?;
    }

    if let Some(interfaces) = &ty.interfaces {
        for interface in interfaces {
            validate_reference(interface, &format!("interfaces of {name}"))?;
        }
    }

    Ok(())
}

/// Validates a type reference: a wrapper chain ending in a named node.
fn validate_reference(ty: &SchemaType, context: &str) -> Result<(), SchemaError> {
    let mut current = ty;
    loop {
        if !current.kind.is_wrapper() {
            return match current.name() {
                Some(_) => Ok(()),
                None => Err(SchemaError::UnnamedType {
                    kind: current.kind.to_string(),
                }),
            };
        }
        current = current
            .of_type()
            .ok_or_else(|| SchemaError::missing_of_type(current.kind.to_string(), context))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Field, TypeKind};

    fn scalar(name: &str) -> SchemaType {
        SchemaType::named(TypeKind::Scalar, name)
    }

    #[test]
    fn test_valid_schema() {
        let schema = Schema::new(vec![
            scalar("String"),
            SchemaType::named(TypeKind::Object, "User").with_fields(vec![
                Field::new("login", SchemaType::non_null(scalar("String"))),
                Field::new(
                    "friends",
                    SchemaType::list(SchemaType::named(TypeKind::Object, "User")),
                ),
            ]),
        ]);

        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_unnamed_type() {
        let schema = Schema::new(vec![SchemaType::new(TypeKind::Object, None)]);
        let err = validate_schema(&schema).expect_err("Should fail");
        assert!(matches!(err, SchemaError::UnnamedType { .. }));
    }

    #[test]
    fn test_wrapper_without_of_type() {
        let broken = SchemaType::new(TypeKind::NonNull, None);
        let schema = Schema::new(vec![
            SchemaType::named(TypeKind::Object, "User")
                .with_fields(vec![Field::new("login", broken)]),
        ]);

        let err = validate_schema(&schema).expect_err("Should fail");
        match err {
            SchemaError::MissingOfType { kind, context } => {
                assert_eq!(kind, "NON_NULL");
                assert_eq!(context, "User.login");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unnamed_field_reference() {
        let schema = Schema::new(vec![SchemaType::named(TypeKind::Object, "User").with_fields(
            vec![Field::new(
                "login",
                SchemaType::list(SchemaType::new(TypeKind::Scalar, None)),
            )],
        )]);

        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::UnnamedType { .. })
        ));
    }

    #[test]
    fn test_duplicate_type() {
        let schema = Schema::new(vec![scalar("Date"), scalar("Date")]);
        let err = validate_schema(&schema).expect_err("Should fail");
        assert!(err.to_string().contains("Date"));
    }

    #[test]
    fn test_top_level_wrapper() {
        let schema = Schema::new(vec![SchemaType::list(scalar("Int"))]);
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::Validation { .. })
        ));
    }
}
