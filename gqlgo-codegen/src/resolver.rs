//! Type name resolution.
//!
//! Maps schema type references onto Go type expressions, honouring the
//! configuration overrides. Resolution looks at one reference at a time and
//! only follows the `ofType` chain, so cyclic object graphs never recurse.

use crate::error::{CodegenError, Result};
use gqlgo_schema::{Config, Field, ScalarConfig, SchemaType, TypeKind};
use std::borrow::Cow;

/// Go predeclared type identifiers.
///
/// <https://go.dev/ref/spec#Predeclared_identifiers>
pub const PREDECLARED_TYPES: &[&str] = &[
    "bool",
    "byte",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Marker prefixed to a type that may be absent.
pub const NULLABLE_MARKER: &str = "*";

/// Prefix of a sequence type.
pub const LIST_MARKER: &str = "[]";

/// Returns true if `name` is a Go predeclared type identifier.
#[must_use]
pub fn is_predeclared(name: &str) -> bool {
    PREDECLARED_TYPES.contains(&name)
}

/// Built-in mapping for the GraphQL specified scalars.
#[must_use]
pub fn default_scalar(name: &str) -> Option<ScalarConfig> {
    match name {
        "Int" => Some(ScalarConfig::named("int32")),
        "Float" => Some(ScalarConfig::named("float64")),
        "String" => Some(ScalarConfig::named("string")),
        "Boolean" => Some(ScalarConfig::named("bool")),
        "ID" => Some(ScalarConfig::backed_by("string")),
        _ => None,
    }
}

/// Returns the effective configuration of a scalar: the explicit override,
/// else the built-in default, else an empty configuration.
#[must_use]
pub fn scalar_config<'a>(config: &'a Config, name: &str) -> Cow<'a, ScalarConfig> {
    if let Some(cfg) = config.scalars.get(name) {
        return Cow::Borrowed(cfg);
    }
    Cow::Owned(default_scalar(name).unwrap_or_default())
}

/// Resolves the Go type expression for a type reference.
///
/// `nullable` is true unless an enclosing `NON_NULL` wrapper stripped it.
///
/// # Errors
/// Returns `CodegenError` for malformed references and conflicting scalar
/// configuration.
pub fn resolve_name(config: &Config, ty: &SchemaType, nullable: bool) -> Result<String> {
    let prefix = if nullable { NULLABLE_MARKER } else { "" };

    match &ty.kind {
        TypeKind::NonNull => resolve_name(config, wrapped(ty)?, false),
        TypeKind::List => {
            let element = resolve_name(config, wrapped(ty)?, true)?;
            Ok(format!("{prefix}{LIST_MARKER}{element}"))
        }
        TypeKind::Scalar => {
            let name = required_name(ty)?;
            let cfg = scalar_config(config, name);
            match cfg.name() {
                Some(go_name) if is_predeclared(go_name) => {
                    if let Some(backing) = cfg.backing_type() {
                        if backing != go_name {
                            return Err(CodegenError::ScalarConflict {
                                scalar: name.to_string(),
                                name: go_name.to_string(),
                                type_name: backing.to_string(),
                            });
                        }
                    }
                    Ok(format!("{prefix}{go_name}"))
                }
                Some(go_name) => Ok(format!("{prefix}{go_name}")),
                None => {
                    if cfg.backing_type().is_none() {
                        tracing::warn!(scalar = name, "no scalar override, using schema name");
                    }
                    Ok(format!("{prefix}{name}"))
                }
            }
        }
        TypeKind::Object => {
            let name = required_name(ty)?;
            let go_name = config
                .type_config(name)
                .and_then(|cfg| cfg.existing_type().or(cfg.name()))
                .unwrap_or(name);
            Ok(format!("{prefix}{go_name}"))
        }
        TypeKind::Enum | TypeKind::Union | TypeKind::InputObject => {
            Ok(format!("{prefix}{}", required_name(ty)?))
        }
        // Interface values carry their own absence (nil or the untyped
        // fallback), so they are never pointer-wrapped.
        TypeKind::Interface => Ok(required_name(ty)?.to_string()),
        TypeKind::Other(_) => Err(CodegenError::unsupported(ty)),
    }
}

/// Resolves a type reference as it appears in a field (nullable by default).
///
/// # Errors
/// See [`resolve_name`].
pub fn type_name(config: &Config, ty: &SchemaType) -> Result<String> {
    resolve_name(config, ty, true)
}

/// Resolves the name under which a top-level type is declared.
///
/// # Errors
/// See [`resolve_name`].
pub fn declared_name(config: &Config, ty: &SchemaType) -> Result<String> {
    resolve_name(config, ty, false)
}

/// Resolves the Go type of a field, honouring per-field overrides.
///
/// # Errors
/// See [`resolve_name`].
pub fn resolve_field_type(config: &Config, parent: &SchemaType, field: &Field) -> Result<String> {
    if let Some(overridden) = field_override_type(config, parent, field) {
        return Ok(overridden.to_string());
    }
    type_name(config, &field.ty)
}

/// Returns the per-field type override, if configured.
#[must_use]
pub fn field_override_type<'a>(
    config: &'a Config,
    parent: &SchemaType,
    field: &Field,
) -> Option<&'a str> {
    config
        .field_config(parent.name()?, &field.name)
        .and_then(|cfg| cfg.field_type())
}

/// Returns the exposed Go identifier of a field.
#[must_use]
pub fn field_ident(config: &Config, parent: &SchemaType, field: &Field) -> String {
    parent
        .name()
        .and_then(|name| config.field_config(name, &field.name))
        .and_then(|cfg| cfg.name())
        .map_or_else(|| exported_name(&field.name), str::to_string)
}

/// Returns true if the field is decoded through a polymorphic decode
/// function: its type bottoms out in an interface or union and no override
/// replaces it.
#[must_use]
pub fn is_polymorphic_field(config: &Config, parent: &SchemaType, field: &Field) -> bool {
    field_override_type(config, parent, field).is_none()
        && field.ty.innermost().kind.is_polymorphic()
}

/// Collects the import paths a type reference needs.
///
/// Only references spelled with an external type carry an import: imported
/// scalars and objects mapped onto an existing type. A scalar declared in
/// the generated package is referenced by its local name.
#[must_use]
pub fn type_imports(config: &Config, ty: &SchemaType) -> Vec<String> {
    let named = ty.innermost();
    let Some(name) = named.name() else {
        return Vec::new();
    };

    let import = match named.kind {
        TypeKind::Scalar => {
            let cfg = scalar_config(config, name);
            if cfg.is_imported() {
                cfg.import().map(str::to_string)
            } else {
                None
            }
        }
        TypeKind::Object => config
            .type_config(name)
            .filter(|cfg| cfg.existing_type().is_some())
            .and_then(|cfg| cfg.import())
            .map(str::to_string),
        _ => None,
    };
    import.into_iter().collect()
}

/// Collects the import paths a field needs.
#[must_use]
pub fn field_imports(config: &Config, parent: &SchemaType, field: &Field) -> Vec<String> {
    let overridden = parent
        .name()
        .and_then(|name| config.field_config(name, &field.name));

    match overridden {
        Some(cfg) if cfg.field_type().is_some() => {
            cfg.import().map(str::to_string).into_iter().collect()
        }
        _ => type_imports(config, &field.ty),
    }
}

/// Converts a schema name to an exported Go identifier by upper-casing its
/// first character.
#[must_use]
pub fn exported_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn required_name(ty: &SchemaType) -> Result<&str> {
    ty.name()
        .ok_or_else(|| CodegenError::malformed(format!("unable to get name for {} type", ty.kind)))
}

fn wrapped(ty: &SchemaType) -> Result<&SchemaType> {
    ty.of_type()
        .ok_or_else(|| CodegenError::malformed(format!("{} wrapper has no ofType", ty.kind)))
}
