use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_document::Document;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InspectCommand {
    /// Document file (JSON, or YAML by extension)
    pub input: PathBuf,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let text = std::fs::read_to_string(&self.input)?;
        let filename = self.input.display().to_string();
        let yaml = matches!(
            self.input.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        let document = if yaml {
            Document::from_yaml(&text, &filename)
        } else {
            Document::from_json(&text, &filename)
        }
        .unwrap_or_exit();

        if let Some(info) = &document.info {
            let title = info.title.as_deref().unwrap_or("(untitled)");
            let version = info.version.as_deref().unwrap_or("-");
            println!("{title} {version}");
            println!();
        }

        println!("operations:");
        for (path, method, operation) in document.operations() {
            let id = operation.operation_id.as_deref().unwrap_or("-");
            let summary = operation
                .summary
                .as_deref()
                .or(operation.description.as_deref())
                .unwrap_or("");
            println!("  {method:7} {path}  {id}  {summary}");
        }

        println!();
        println!("definitions:");
        for name in document.definition_names() {
            println!("  {name}");
        }
        Ok(())
    }
}
