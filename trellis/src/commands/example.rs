use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_codegen::{ExampleOptions, emit_example, format_example};

use super::{SchemaSelector, UnwrapOrExit, write_output};

#[derive(Args)]
pub struct ExampleCommand {
    /// Document or bare schema file (JSON, or YAML by extension)
    pub input: PathBuf,

    #[command(flatten)]
    pub selector: SchemaSelector,

    /// Key separator for flattened paths
    #[arg(long, default_value = trellis_codegen::DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Name of the root node in flattened paths
    #[arg(long, default_value = trellis_codegen::DEFAULT_ROOT_NAME)]
    pub root_name: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl ExampleCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.selector.select(&self.input)?;
        let raw = emit_example(
            &schema,
            &self.separator,
            &self.root_name,
            &ExampleOptions::default(),
        )
        .unwrap_or_exit();
        let mut text = format_example(&raw);
        text.push('\n');
        write_output(self.out.as_deref(), &text)
    }
}
