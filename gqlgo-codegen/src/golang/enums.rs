//! Enum code generation.

use super::Rendered;
use super::comment::{COMMENT, render_doc};
use crate::error::Result;
use crate::resolver::declared_name;
use gqlgo_schema::{Config, SchemaType};

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    config: &'a Config,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates a string-backed type with one constant per value.
    ///
    /// Constants are named `<Enum>_<VALUE>` so that enums sharing a value
    /// name do not collide, and follow the schema's declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError` if the enum is unnamed.
    pub fn generate(&self, ty: &SchemaType) -> Result<Rendered> {
        let name = declared_name(self.config, ty)?;
        let mut output = render_doc(COMMENT, ty.description.as_deref(), false, None);
        output.push_str(&format!("type {} string\n", name));

        let values = ty.enum_values();
        if !values.is_empty() {
            output.push_str("\nconst (\n");
            for value in values {
                output.push_str(&render_doc(
                    "\t// ",
                    value.description.as_deref(),
                    value.is_deprecated,
                    value.deprecation_reason.as_deref(),
                ));
                output.push_str(&format!(
                    "\t{}_{} {} = \"{}\"\n",
                    name, value.name, name, value.name
                ));
            }
            output.push_str(")\n");
        }

        Ok(Rendered::new(output))
    }
}
