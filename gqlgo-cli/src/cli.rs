//! Command-line arguments and the generation run.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gqlgo_codegen::{DEFAULT_PACKAGE, DirectorySink, Generator, MemorySink};
use gqlgo_schema::{Config, Schema, parse_config_file, parse_introspection};
use tracing::info;

/// Generate Go types and JSON decoders from a GraphQL introspection response
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gqlgo", author, version)]
pub struct Args {
    /// Generator configuration (scalar and type overrides)
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Introspection response to read (stdin if omitted)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Output directory (./<package> if omitted)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Go package name of the generated files
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Print the generated files to stdout instead of writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Args {
    /// Returns the directory the files are written to.
    pub fn out_dir(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(".").join(&self.package))
    }

    fn load_config(&self) -> Result<Config> {
        parse_config_file(&self.config)
            .with_context(|| format!("failed to load config {}", self.config.display()))
    }

    fn load_schema(&self) -> Result<Schema> {
        let source = match &self.schema {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read schema {}", path.display()))?,
            None => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .context("failed to read schema from stdin")?;
                source
            }
        };
        parse_introspection(&source).context("failed to parse introspection response")
    }
}

/// Runs one generation: load, generate, then write or print.
///
/// # Errors
/// Returns an error if any input cannot be loaded, generation fails, or the
/// output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let config = args.load_config()?;
    let schema = args.load_schema()?;
    info!(
        types = schema.types.len(),
        package = %args.package,
        "loaded introspection schema"
    );

    let generator = Generator::new(&schema, &config).with_package(args.package.as_str());

    if args.dry_run {
        let mut sink = MemorySink::new();
        generator
            .write_to(&mut sink)
            .context("failed to generate Go code")?;
        let stdout = std::io::stdout();
        print_files(&sink, &mut stdout.lock())?;
        return Ok(());
    }

    let mut sink = DirectorySink::new(args.out_dir());
    let count = generator
        .write_to(&mut sink)
        .context("failed to generate Go code")?;
    info!(files = count, out = %sink.root().display(), "generation complete");
    Ok(())
}

/// Prints each rendered file preceded by a `// <file>` banner.
fn print_files(sink: &MemorySink, out: &mut impl Write) -> Result<()> {
    for (file_no, (name, text)) in sink.iter().enumerate() {
        if file_no != 0 {
            writeln!(out)?;
        }
        writeln!(out, "// {name}")?;
        out.write_all(text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlgo_codegen::OutputSink;

    const SCHEMA: &str = r#"{
        "data": {
            "__schema": {
                "types": [
                    { "kind": "SCALAR", "name": "ID" },
                    {
                        "kind": "ENUM",
                        "name": "Color",
                        "enumValues": [ { "name": "RED" } ]
                    }
                ]
            }
        }
    }"#;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("Failed to parse args")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["gqlgo"]);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert_eq!(args.schema, None);
        assert_eq!(args.package, "fixmepkg");
        assert!(!args.dry_run);
        assert_eq!(args.out_dir(), PathBuf::from("./fixmepkg"));
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "gqlgo",
            "--config",
            "gql.json",
            "--schema",
            "schema.json",
            "--out",
            "gen",
            "--package",
            "github",
            "--dry-run",
        ]);
        assert_eq!(args.config, PathBuf::from("gql.json"));
        assert_eq!(args.schema, Some(PathBuf::from("schema.json")));
        assert_eq!(args.out_dir(), PathBuf::from("gen"));
        assert_eq!(args.package, "github");
        assert!(args.dry_run);
    }

    #[test]
    fn test_package_sets_default_out_dir() {
        let args = parse(&["gqlgo", "--package", "github"]);
        assert_eq!(args.out_dir(), PathBuf::from("./github"));
    }

    #[test]
    fn test_run_writes_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = dir.path().join("config.json");
        let schema = dir.path().join("schema.json");
        std::fs::write(&config, "{}").expect("Failed to write config");
        std::fs::write(&schema, SCHEMA).expect("Failed to write schema");

        let args = Args {
            config,
            schema: Some(schema),
            out: Some(dir.path().join("out")),
            package: "paint".to_string(),
            dry_run: false,
        };
        run(&args).expect("Failed to run");

        let scalars = std::fs::read_to_string(dir.path().join("out/scalars.go"))
            .expect("Failed to read scalars.go");
        assert_eq!(scalars, "package paint\n\ntype ID string\n");
        let enums = std::fs::read_to_string(dir.path().join("out/enums.go"))
            .expect("Failed to read enums.go");
        assert!(enums.contains("\tColor_RED Color = \"RED\"\n"));
    }

    #[test]
    fn test_run_reports_missing_config() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let args = Args {
            config: dir.path().join("missing.json"),
            schema: None,
            out: None,
            package: "paint".to_string(),
            dry_run: true,
        };

        let err = run(&args).expect_err("Should fail");
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn test_print_files() {
        let mut sink = MemorySink::new();
        sink.write_file("scalars.go", "paint", &[], &["type ID string\n".to_string()])
            .expect("Failed to write");
        sink.write_file("enums.go", "paint", &[], &["type Color string\n".to_string()])
            .expect("Failed to write");

        let mut out = Vec::new();
        print_files(&sink, &mut out).expect("Failed to print");

        assert_eq!(
            String::from_utf8(out).expect("Invalid UTF-8"),
            "// scalars.go\npackage paint\n\ntype ID string\n\
             \n\
             // enums.go\npackage paint\n\ntype Color string\n"
        );
    }
}
