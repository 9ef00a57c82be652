//! Scalar code generation.

use super::Rendered;
use super::comment::{COMMENT, render_doc};
use crate::error::{CodegenError, Result};
use crate::resolver::{declared_name, scalar_config};
use gqlgo_schema::{Config, SchemaType};

/// Generator for scalar type declarations.
pub struct ScalarGenerator<'a> {
    config: &'a Config,
}

impl<'a> ScalarGenerator<'a> {
    /// Creates a new scalar generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates `type <Name> <Type>` for a scalar.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingScalarType` if no backing type is
    /// configured.
    pub fn generate(&self, ty: &SchemaType) -> Result<Rendered> {
        let name = declared_name(self.config, ty)?;
        let cfg = scalar_config(self.config, ty.name().unwrap_or_default());
        let backing = cfg
            .backing_type()
            .ok_or_else(|| CodegenError::MissingScalarType {
                scalar: name.clone(),
            })?;

        let mut output = render_doc(COMMENT, ty.description.as_deref(), false, None);
        output.push_str(&format!("type {} {}\n", name, backing));

        let mut rendered = Rendered::new(output);
        rendered.add_imports(cfg.import());
        Ok(rendered)
    }
}
