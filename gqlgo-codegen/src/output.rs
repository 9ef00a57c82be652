//! Output file aggregation.
//!
//! Rendered chunks are accumulated per destination file. Each file keeps its
//! imports unique and in first-seen order, and its chunks in the order they
//! were generated, which is schema document order.

use indexmap::IndexMap;

/// Accumulator for one generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFile {
    /// Go package name.
    pub package: String,
    /// Import paths, unique, first-seen order.
    pub imports: Vec<String>,
    /// Source chunks, generation order.
    pub chunks: Vec<String>,
}

impl OutputFile {
    /// Creates an empty file for a package.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            chunks: Vec::new(),
        }
    }

    /// Returns true if the import path is already recorded.
    #[must_use]
    pub fn has_import(&self, import: &str) -> bool {
        self.imports.iter().any(|im| im == import)
    }

    /// Appends a chunk and records the imports it needs.
    pub fn add<I, S>(&mut self, imports: I, chunk: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for import in imports {
            let import = import.as_ref();
            if !self.has_import(import) {
                self.imports.push(import.to_string());
            }
        }
        self.chunks.push(chunk.into());
    }

    /// Renders the complete file: package clause, import block when there
    /// are imports, then each chunk preceded by a blank line.
    #[must_use]
    pub fn render(&self) -> String {
        render_file(&self.package, &self.imports, &self.chunks)
    }
}

/// Renders a Go source file from its parts.
#[must_use]
pub fn render_file(package: &str, imports: &[String], chunks: &[String]) -> String {
    let mut output = format!("package {}\n", package);

    if !imports.is_empty() {
        output.push_str("\nimport (\n");
        for import in imports {
            output.push_str(&format!("\t\"{}\"\n", import));
        }
        output.push_str(")\n");
    }

    for chunk in chunks {
        output.push('\n');
        output.push_str(chunk);
    }

    output
}

/// All files of a generation run, in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFiles {
    files: IndexMap<String, OutputFile>,
}

impl OutputFiles {
    /// Creates an empty set of files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulator for `file`, creating it for `package` on
    /// first use.
    pub fn get(&mut self, file: &str, package: &str) -> &mut OutputFile {
        self.files
            .entry(file.to_string())
            .or_insert_with(|| OutputFile::new(package))
    }

    /// Looks up a file without creating it.
    #[must_use]
    pub fn file(&self, file: &str) -> Option<&OutputFile> {
        self.files.get(file)
    }

    /// Returns the number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no file has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over `(file, accumulator)` pairs in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputFile)> {
        self.files.iter().map(|(name, file)| (name.as_str(), file))
    }
}

impl IntoIterator for OutputFiles {
    type Item = (String, OutputFile);
    type IntoIter = indexmap::map::IntoIter<String, OutputFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
