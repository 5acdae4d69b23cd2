//! Command execution implementations

use super::Commands;
use super::{card_art, extract};
use crate::export::ExtractOptions;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                source,
                destination,
                mode,
                skip_unsupported,
                quiet,
            } => {
                let options = ExtractOptions::new()
                    .with_mode((*mode).into())
                    .with_skip_unsupported(*skip_unsupported);
                extract::execute(source, destination, &options, *quiet)
            }
            Commands::CardArt {
                source,
                destination,
                quiet,
            } => card_art::execute(source, destination, *quiet),
        }
    }
}
