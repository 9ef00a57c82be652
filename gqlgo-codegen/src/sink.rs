//! Destinations for generated files.

use crate::error::Result;
use crate::output::render_file;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Receives generated files, one at a time.
pub trait OutputSink {
    /// Writes one file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be written.
    fn write_file(
        &mut self,
        file: &str,
        package: &str,
        imports: &[String],
        chunks: &[String],
    ) -> Result<()>;
}

/// Sink that keeps rendered files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: IndexMap<String, String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered text of a file.
    #[must_use]
    pub fn get(&self, file: &str) -> Option<&str> {
        self.files.get(file).map(String::as_str)
    }

    /// Iterates over `(file, text)` pairs in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// Returns the number of files written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write_file(
        &mut self,
        file: &str,
        package: &str,
        imports: &[String],
        chunks: &[String],
    ) -> Result<()> {
        self.files
            .insert(file.to_string(), render_file(package, imports, chunks));
        Ok(())
    }
}

/// Sink that writes files below a root directory.
///
/// Parent directories are created as needed; existing files are truncated.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirectorySink {
    fn write_file(
        &mut self,
        file: &str,
        package: &str,
        imports: &[String],
        chunks: &[String],
    ) -> Result<()> {
        let path = self.root.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, render_file(package, imports, chunks))?;
        tracing::info!(path = %path.display(), "wrote generated file");
        Ok(())
    }
}
