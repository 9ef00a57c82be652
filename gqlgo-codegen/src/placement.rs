//! Placement of generated declarations into output files.

use crate::error::{CodegenError, Result};
use crate::resolver::{declared_name, is_predeclared, scalar_config};
use gqlgo_schema::{Config, SchemaType, TypeKind};

/// Default file for scalar declarations.
pub const SCALARS_FILE: &str = "scalars.go";
/// Default file for object declarations.
pub const TYPES_FILE: &str = "types.go";
/// Default file for enum declarations.
pub const ENUMS_FILE: &str = "enums.go";
/// Default file for interface declarations.
pub const INTERFACES_FILE: &str = "interfaces.go";
/// Default file for union declarations.
pub const UNIONS_FILE: &str = "unions.go";
/// File for declarations shared by all polymorphic decoders.
pub const SUPPORT_FILE: &str = "decode.go";

/// Returns the file into which the declaration of `ty` should be written.
///
/// An empty string means no standalone declaration is generated: the type
/// maps onto a predeclared or externally provided Go type, or is an input
/// object.
///
/// # Errors
/// Returns `CodegenError` for malformed types and kinds that cannot be
/// declared.
pub fn file_for(config: &Config, ty: &SchemaType) -> Result<String> {
    if matches!(ty.kind, TypeKind::InputObject) {
        return Ok(String::new());
    }

    let name = declared_name(config, ty)?;
    if is_predeclared(&name) {
        return Ok(String::new());
    }

    let type_config = ty.name().and_then(|n| config.type_config(n));
    let configured_file = type_config.and_then(|cfg| cfg.file());

    let file = match ty.kind {
        TypeKind::Scalar => {
            let cfg = scalar_config(config, ty.name().unwrap_or_default());
            if cfg.is_imported() {
                return Ok(String::new());
            }
            cfg.file().unwrap_or(SCALARS_FILE).to_string()
        }
        TypeKind::Object => {
            if type_config.and_then(|cfg| cfg.existing_type()).is_some() {
                return Ok(String::new());
            }
            configured_file.unwrap_or(TYPES_FILE).to_string()
        }
        TypeKind::Enum => configured_file.unwrap_or(ENUMS_FILE).to_string(),
        TypeKind::Interface => configured_file.unwrap_or(INTERFACES_FILE).to_string(),
        TypeKind::Union => configured_file.unwrap_or(UNIONS_FILE).to_string(),
        _ => return Err(CodegenError::unsupported(ty)),
    };

    Ok(file)
}
