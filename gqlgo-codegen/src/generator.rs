//! Generation driver.
//!
//! Walks the schema types in document order, places and renders each one,
//! and collects the chunks per output file. Nothing reaches a sink until
//! the whole schema has been generated, so a fatal error leaves no partial
//! output behind.

use crate::error::Result;
use crate::golang::{self, SupportGenerator};
use crate::output::OutputFiles;
use crate::placement::{SUPPORT_FILE, file_for};
use crate::sink::OutputSink;
use gqlgo_schema::{Config, Schema, SchemaType, TypeKind, validate_schema};

/// Package name used when none is given.
pub const DEFAULT_PACKAGE: &str = "fixmepkg";

/// Go code generator for one schema and configuration.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: &'a Config,
    package: String,
}

impl<'a> Generator<'a> {
    /// Creates a generator emitting into [`DEFAULT_PACKAGE`].
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self {
            schema,
            config,
            package: DEFAULT_PACKAGE.to_string(),
        }
    }

    /// Sets the Go package name.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Returns the Go package name.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Generates all files.
    ///
    /// # Errors
    /// Returns `CodegenError` on the first malformed type or unsatisfiable
    /// scalar configuration.
    pub fn generate(&self) -> Result<OutputFiles> {
        validate_schema(self.schema)?;

        let mut files = OutputFiles::new();
        let mut needs_support = false;

        for ty in &self.schema.types {
            if !is_generated_kind(ty) {
                tracing::warn!(
                    kind = %ty.kind,
                    name = ty.name().unwrap_or_default(),
                    "skipping type of unsupported kind"
                );
                continue;
            }

            let file = file_for(self.config, ty)?;
            if file.is_empty() {
                if ty.kind == TypeKind::InputObject {
                    tracing::info!(
                        name = ty.name().unwrap_or_default(),
                        "skipping input object"
                    );
                } else {
                    tracing::debug!(
                        name = ty.name().unwrap_or_default(),
                        "no standalone declaration needed"
                    );
                }
                continue;
            }

            let rendered = golang::render(self.config, ty)?;
            needs_support |= ty.kind.is_polymorphic();
            files
                .get(&file, &self.package)
                .add(&rendered.imports, rendered.chunk);
        }

        if needs_support {
            let support = SupportGenerator::new().generate();
            files
                .get(SUPPORT_FILE, &self.package)
                .add(&support.imports, support.chunk);
        }

        Ok(files)
    }

    /// Generates all files and hands them to `sink`.
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn write_to(&self, sink: &mut dyn OutputSink) -> Result<usize> {
        let files = self.generate()?;
        let count = files.len();
        for (name, file) in files {
            tracing::debug!(file = %name, chunks = file.chunks.len(), "flushing file");
            sink.write_file(&name, &file.package, &file.imports, &file.chunks)?;
        }
        Ok(count)
    }
}

fn is_generated_kind(ty: &SchemaType) -> bool {
    matches!(
        ty.kind,
        TypeKind::Scalar
            | TypeKind::Object
            | TypeKind::Interface
            | TypeKind::Union
            | TypeKind::Enum
            | TypeKind::InputObject
    )
}
