use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use trellis_codegen::{ArrayStyle, DateStyle, DeclareOptions};

use super::{SchemaSelector, UnwrapOrExit, write_output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Csharp,
    Typescript,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Document or bare schema file (JSON, or YAML by extension)
    pub input: PathBuf,

    #[command(flatten)]
    pub selector: SchemaSelector,

    /// Output dialect
    #[arg(short, long, value_enum, default_value_t = Language::Csharp)]
    pub language: Language,

    /// Name of the root declaration
    #[arg(short, long, default_value = "Root")]
    pub name: String,

    /// Mark members outside the required set as nullable
    #[arg(long)]
    pub nullable: bool,

    /// Render arrays as T[] instead of a generic collection
    #[arg(long)]
    pub native_arrays: bool,

    /// Render date/date-time values as plain strings
    #[arg(long)]
    pub dates_as_strings: bool,

    /// Words exempt from singularization (repeatable)
    #[arg(long = "keep-singular")]
    pub keep_singular: Vec<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.selector.select(&self.input)?;

        let mut options = DeclareOptions::new(&self.name);
        options.nullable = self.nullable;
        if self.native_arrays {
            options.array_style = ArrayStyle::Native;
        }
        if self.dates_as_strings {
            options.date_style = DateStyle::Text;
        }
        options.keep_singular.extend(self.keep_singular.iter().cloned());

        let text = match self.language {
            Language::Csharp => trellis_codegen_csharp::emit(&schema, &options),
            Language::Typescript => trellis_codegen_typescript::emit(&schema, &options),
        }
        .unwrap_or_exit();
        write_output(self.out.as_deref(), &text)
    }
}
