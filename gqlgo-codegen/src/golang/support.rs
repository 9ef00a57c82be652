//! Package-level declarations shared by the generated decoders.

use super::Rendered;
use super::decode::{DISCRIMINATOR_FIELD, UNKNOWN_TYPENAME_ERROR};

/// Generator for declarations emitted once per package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportGenerator;

impl SupportGenerator {
    /// Creates a new support generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the error type returned by decode functions when a
    /// payload's discriminator names no known type.
    #[must_use]
    pub fn generate(&self) -> Rendered {
        let mut output = String::new();

        output.push_str(&format!(
            "// {UNKNOWN_TYPENAME_ERROR} reports a polymorphic payload whose {DISCRIMINATOR_FIELD}\n\
             // names no generated type.\n"
        ));
        output.push_str(&format!("type {UNKNOWN_TYPENAME_ERROR} struct {{\n"));
        output.push_str("\t// Type is the interface or union being decoded.\n");
        output.push_str("\tType string\n");
        output.push('\n');
        output.push_str(&format!(
            "\t// Typename is the unrecognized {DISCRIMINATOR_FIELD} value.\n"
        ));
        output.push_str("\tTypename string\n");
        output.push_str("}\n\n");

        output.push_str(&format!(
            "func (e *{UNKNOWN_TYPENAME_ERROR}) Error() string {{\n"
        ));
        output.push_str(&format!(
            "\treturn fmt.Sprintf(\"%s: unknown {DISCRIMINATOR_FIELD} %q\", e.Type, e.Typename)\n"
        ));
        output.push_str("}\n");

        let mut rendered = Rendered::new(output);
        rendered.add_import("fmt");
        rendered
    }
}

impl Default for SupportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
