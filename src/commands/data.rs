use clap::Args;
use std::path::PathBuf;

use vitasync_core::{write_document, DocumentStore};

use crate::config::Config;

/// Print the data document as JSON
#[derive(Args)]
pub struct ExportCommand {
    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(
        &self,
        store: &DocumentStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let data = store.load_or_create(&config.profile_name.value)?;

        match &self.output {
            Some(path) => {
                DocumentStore::new(path.clone()).save(&data)?;
                tracing::info!("Exported data to {}", path.display());
                println!("Data successfully saved to {}", path.display());
            }
            None => println!("{}", write_document(&data)?),
        }
        Ok(())
    }
}

/// Replace the data document with the contents of another file
#[derive(Args)]
pub struct ImportCommand {
    /// JSON document to load
    input: PathBuf,
}

impl ImportCommand {
    pub fn run(&self, store: &DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
        let data = DocumentStore::new(self.input.clone()).load()?;
        store.save(&data)?;
        tracing::info!(
            "Imported {} into {}",
            self.input.display(),
            store.path().display()
        );

        println!("Data successfully loaded from {}", self.input.display());
        Ok(())
    }
}
