//! Subcommand enum definitions for CLI

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::export::ExtractMode;

/// Output format for `extract`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Object bytes as stored
    Raw,
    /// Decoded objects as JSON
    Decoded,
}

impl From<ModeArg> for ExtractMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Raw => ExtractMode::Raw,
            ModeArg::Decoded => ExtractMode::Decoded,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every object of a bundle, one directory per class
    Extract {
        /// Source bundle file
        source: PathBuf,

        /// Output directory
        destination: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "raw")]
        mode: ModeArg,

        /// Leave out classes without a decoder (raw mode)
        #[arg(long)]
        skip_unsupported: bool,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Resolve card art from a cards bundle and write CardArt.xml
    CardArt {
        /// Source cards bundle file
        source: PathBuf,

        /// Output directory
        destination: PathBuf,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}
