//! Go code generation modules.
//!
//! One generator per schema kind. Each turns a single schema type into a Go
//! source chunk plus the import paths that chunk needs; none of them touch
//! the filesystem or know which file the chunk ends up in.

pub mod comment;
pub mod decode;
pub mod enums;
pub mod interfaces;
pub mod objects;
pub mod scalars;
pub mod support;
pub mod unions;

pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;
pub use objects::ObjectGenerator;
pub use scalars::ScalarGenerator;
pub use support::SupportGenerator;
pub use unions::UnionGenerator;

use crate::error::{CodegenError, Result};
use gqlgo_schema::{Config, SchemaType, TypeKind};

/// A rendered Go declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Import paths the chunk needs, first-seen order, no duplicates.
    pub imports: Vec<String>,
    /// Go source text.
    pub chunk: String,
}

impl Rendered {
    /// Creates a rendered chunk with no imports.
    #[must_use]
    pub fn new(chunk: String) -> Self {
        Self {
            imports: Vec::new(),
            chunk,
        }
    }

    /// Records an import path unless it is already present.
    pub fn add_import(&mut self, import: impl Into<String>) {
        let import = import.into();
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
    }

    /// Records several import paths.
    pub fn add_imports<I, S>(&mut self, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for import in imports {
            self.add_import(import);
        }
    }
}

/// Renders a type with the generator for its kind.
///
/// # Errors
/// Returns `CodegenError` if the kind has no generator or rendering fails.
pub fn render(config: &Config, ty: &SchemaType) -> Result<Rendered> {
    match ty.kind {
        TypeKind::Scalar => ScalarGenerator::new(config).generate(ty),
        TypeKind::Enum => EnumGenerator::new(config).generate(ty),
        TypeKind::Object => ObjectGenerator::new(config).generate(ty),
        TypeKind::Interface => InterfaceGenerator::new(config).generate(ty),
        TypeKind::Union => UnionGenerator::new(config).generate(ty),
        _ => Err(CodegenError::unsupported(ty)),
    }
}
