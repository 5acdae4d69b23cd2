//! Subcommands

pub mod card_art;
pub mod definitions;
pub mod execute;
pub mod extract;

pub use definitions::{Commands, ModeArg};
