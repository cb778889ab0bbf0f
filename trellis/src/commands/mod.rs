mod example;
mod generate;
mod inspect;

use std::path::Path;

use clap::{Args, Parser, Subcommand};
use example::ExampleCommand;
use eyre::{Result, bail};
use generate::GenerateCommand;
use inspect::InspectCommand;
use trellis_document::Document;
use trellis_ir::SchemaNode;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for trellis_document::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for trellis_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version)]
#[command(about = "Generate example instances and type declarations from API schema documents")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Example(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Emit an example data instance for a schema
    Example(ExampleCommand),

    /// Emit type declarations for a schema
    Generate(GenerateCommand),

    /// List the paths, operations and definitions of a document
    Inspect(InspectCommand),
}

/// How a schema is picked out of the input file.
///
/// With `--definition`, the named reusable definition. With `--path`,
/// the response schema of one operation (resolved once when it is a
/// pure reference). With neither, the file itself is read as a bare
/// schema.
#[derive(Args)]
pub(crate) struct SchemaSelector {
    /// Name of a reusable definition
    #[arg(long, conflicts_with = "path")]
    pub definition: Option<String>,

    /// Route template of an operation (e.g. /pets)
    #[arg(long)]
    pub path: Option<String>,

    /// Method of the operation selected by --path
    #[arg(long, default_value = "get")]
    pub method: String,

    /// Status code of the response schema selected by --path
    #[arg(long, default_value = "200")]
    pub status: String,
}

impl SchemaSelector {
    pub fn select(&self, input: &Path) -> Result<SchemaNode> {
        let text = std::fs::read_to_string(input)?;
        let filename = input.display().to_string();
        let yaml = matches!(
            input.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );

        if self.definition.is_none() && self.path.is_none() {
            let schema = if yaml {
                trellis_document::schema_from_yaml(&text, &filename)
            } else {
                trellis_document::schema_from_json(&text, &filename)
            };
            return Ok(schema.unwrap_or_exit());
        }

        let document = if yaml {
            Document::from_yaml(&text, &filename)
        } else {
            Document::from_json(&text, &filename)
        }
        .unwrap_or_exit();

        if let Some(name) = &self.definition {
            let Some(schema) = document.definition(name) else {
                bail!("no definition named `{name}` in {filename}");
            };
            return Ok(schema.clone());
        }

        let Some(path) = self.path.as_deref() else {
            bail!("--path or --definition is required to select a schema");
        };
        let Some(method) = trellis_document::Method::parse(&self.method) else {
            bail!("unknown method `{}`", self.method);
        };
        let Some(operation) = document.operation(path, method) else {
            bail!("no operation for {method} {path} in {filename}");
        };
        let Some(schema) = operation.response_schema(&self.status) else {
            bail!("{method} {path} declares no {} response schema", self.status);
        };
        // A pure reference carries no shape of its own; resolve it once
        // against the document's definitions.
        if schema.has_empty_reference() {
            if let Some(reference) = schema.reference.as_deref() {
                if let Some(resolved) = document.resolve(reference) {
                    return Ok(resolved.clone());
                }
            }
        }
        Ok(schema.clone())
    }
}

/// Write output to a file, or to stdout when no path is given.
pub(crate) fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
