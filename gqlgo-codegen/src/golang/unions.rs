//! Union code generation.

use super::Rendered;
use super::comment::{COMMENT, render_doc};
use super::decode::{JSON_IMPORT, render_decoder};
use crate::error::Result;
use crate::resolver::declared_name;
use gqlgo_schema::{Config, SchemaType};

/// Generator for union definitions.
pub struct UnionGenerator<'a> {
    config: &'a Config,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates an empty Go interface for the union, plus its untyped
    /// fallback and decode function. Callers type-switch on the decoded
    /// value to reach the members.
    ///
    /// # Errors
    /// Returns `CodegenError` if a possible type cannot be resolved.
    pub fn generate(&self, ty: &SchemaType) -> Result<Rendered> {
        let name = declared_name(self.config, ty)?;
        let mut output = render_doc(COMMENT, ty.description.as_deref(), false, None);
        output.push_str(&format!("type {} interface{{}}\n\n", name));
        let decoder = render_decoder(self.config, ty, &name)?;
        output.push_str(&decoder.chunk);

        let mut rendered = Rendered::new(output);
        rendered.add_import(JSON_IMPORT);
        rendered.add_imports(decoder.imports);
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlgo_schema::{TypeConfig, TypeKind};

    #[test]
    fn test_generate_union() {
        let config = Config::new();
        let ty = SchemaType::named(TypeKind::Union, "SearchResult")
            .with_description("Results of a search.")
            .with_possible_types(vec![
                SchemaType::named(TypeKind::Object, "Issue"),
                SchemaType::named(TypeKind::Object, "Repository"),
            ]);

        let rendered = UnionGenerator::new(&config)
            .generate(&ty)
            .expect("Failed to render");

        assert!(rendered.chunk.starts_with(
            "// Results of a search.\ntype SearchResult interface{}\n\n"
        ));
        assert!(rendered.chunk.contains("type UntypedSearchResult map[string]interface{}\n"));
        assert!(rendered.chunk.contains(
            "func DecodeSearchResult(data []byte) (SearchResult, error) {\n"
        ));
        assert!(rendered.chunk.contains("\tcase \"Issue\":\n\t\tvar v Issue\n"));
        assert!(rendered.chunk.contains("\tcase \"Repository\":\n\t\tvar v Repository\n"));
        assert_eq!(rendered.imports, vec!["encoding/json"]);
    }

    #[test]
    fn test_union_imports_external_members() {
        let config = Config::new().with_type(
            "Commit",
            TypeConfig {
                r#type: Some("git.Commit".to_string()),
                import: Some("example.com/git".to_string()),
                ..TypeConfig::default()
            },
        );
        let ty = SchemaType::named(TypeKind::Union, "Target")
            .with_possible_types(vec![SchemaType::named(TypeKind::Object, "Commit")]);

        let rendered = UnionGenerator::new(&config)
            .generate(&ty)
            .expect("Failed to render");

        assert!(rendered.chunk.contains("\t\tvar v git.Commit\n"));
        assert_eq!(rendered.imports, vec!["encoding/json", "example.com/git"]);
    }
}
