//! Interface code generation.

use super::Rendered;
use super::comment::{COMMENT, render_doc};
use super::decode::{JSON_IMPORT, decode_statements, render_decoder, untyped_name};
use super::objects::accessor_name;
use crate::error::Result;
use crate::resolver::{
    declared_name, field_ident, field_imports, is_polymorphic_field, resolve_field_type,
};
use gqlgo_schema::{Config, Field, SchemaType};

/// Generator for interface definitions.
pub struct InterfaceGenerator<'a> {
    config: &'a Config,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates the Go interface, its untyped fallback and its decode
    /// function.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field or possible type cannot be resolved.
    pub fn generate(&self, ty: &SchemaType) -> Result<Rendered> {
        let name = declared_name(self.config, ty)?;
        let mut output = render_doc(COMMENT, ty.description.as_deref(), false, None);

        if ty.fields().is_empty() {
            output.push_str(&format!("type {} interface{{}}\n", name));
        } else {
            output.push_str(&format!("type {} interface {{\n", name));
            for (field_no, field) in ty.fields().iter().enumerate() {
                if field_no != 0 {
                    output.push('\n');
                }
                output.push_str(&render_doc(
                    "\t// ",
                    field.description.as_deref(),
                    field.is_deprecated,
                    field.deprecation_reason.as_deref(),
                ));
                output.push_str(&format!(
                    "\t{}() {}\n",
                    accessor_name(&field_ident(self.config, ty, field)),
                    resolve_field_type(self.config, ty, field)?
                ));
            }
            output.push_str("}\n");
        }

        output.push('\n');
        let decoder = render_decoder(self.config, ty, &name)?;
        output.push_str(&decoder.chunk);

        for field in ty.fields() {
            output.push('\n');
            output.push_str(&self.generate_untyped_accessor(ty, &name, field)?);
        }

        let mut rendered = Rendered::new(output);
        rendered.add_import(JSON_IMPORT);
        rendered.add_imports(decoder.imports);
        for field in ty.fields() {
            rendered.add_imports(field_imports(self.config, ty, field));
        }
        Ok(rendered)
    }

    /// Generates an accessor on the untyped fallback.
    ///
    /// The map entry is re-encoded and decoded into the accessor's type, so
    /// numbers come back as the declared integer or float type rather than
    /// `float64`. Missing or undecodable entries yield the zero value.
    fn generate_untyped_accessor(
        &self,
        ty: &SchemaType,
        name: &str,
        field: &Field,
    ) -> Result<String> {
        let untyped = untyped_name(name);
        let accessor = accessor_name(&field_ident(self.config, ty, field));
        let go_type = resolve_field_type(self.config, ty, field)?;
        let mut output = String::new();

        output.push_str(&format!(
            "// {} returns the {} entry of the payload.\n",
            accessor, field.name
        ));
        output.push_str(&format!(
            "func (v {}) {}() {} {{\n",
            untyped, accessor, go_type
        ));
        output.push_str(&format!("\tvar out {}\n", go_type));

        if is_polymorphic_field(self.config, ty, field) {
            output.push_str("\t_ = func() error {\n");
            output.push_str(&format!(
                "\t\traw, err := json.Marshal(v[\"{}\"])\n",
                field.name
            ));
            output.push_str("\t\tif err != nil {\n");
            output.push_str("\t\t\treturn err\n");
            output.push_str("\t\t}\n");
            output.push_str(&decode_statements(
                self.config,
                &field.ty,
                true,
                "raw",
                "out",
                2,
                0,
            )?);
            output.push_str("\t\treturn nil\n");
            output.push_str("\t}()\n");
        } else {
            output.push_str(&format!(
                "\tif raw, err := json.Marshal(v[\"{}\"]); err == nil {{\n",
                field.name
            ));
            output.push_str("\t\t_ = json.Unmarshal(raw, &out)\n");
            output.push_str("\t}\n");
        }

        output.push_str("\treturn out\n");
        output.push_str("}\n");
        Ok(output)
    }
}
