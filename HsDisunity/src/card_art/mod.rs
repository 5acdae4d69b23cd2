//! Card art resolution
//!
//! Walks decoded game objects, follows their card definition components
//! and the materials those reference, and collects one [`CardArt`] record
//! per resolvable card.

mod resolver;
mod types;

pub use resolver::{
    extract_card_art, extract_card_art_with_progress, resolve_card_art,
    resolve_card_art_with_progress, texture_base_name,
};
pub use types::{CardArt, CardArtCollection};
