//! # HsDisunity
//!
//! A pure-Rust library for reading Unity asset bundles and resolving
//! Hearthstone card art from them.
//!
//! ## Supported Formats
//!
//! - **UnityRaw bundles** enclosing a single asset file (format versions 5-13)
//! - **Objects**: `GameObject`, `Transform`, `Material`, `Texture2D` and the
//!   card definition `MonoBehaviour`
//!
//! ## Quick Start
//!
//! ### Resolving Card Art
//!
//! ```no_run
//! use hsdisunity::card_art::extract_card_art;
//!
//! let cards = extract_card_art("cards0.unity3d")?;
//! for card in &cards {
//!     println!("{} -> {}", card.name, card.texture_name);
//! }
//! # Ok::<(), hsdisunity::Error>(())
//! ```
//!
//! ### Walking Objects
//!
//! ```no_run
//! use hsdisunity::prelude::*;
//!
//! let mut asset = AssetFile::open("cards0.unity3d")?;
//! let loaded = load_objects(&mut asset)?;
//! for (path_id, game_object) in loaded.objects.game_objects() {
//!     println!("{path_id}: {}", game_object.name);
//! }
//! # Ok::<(), hsdisunity::Error>(())
//! ```
//!
//! ### Extracting to Disk
//!
//! ```no_run
//! use hsdisunity::export::{ExtractOptions, extract, export_card_art};
//!
//! extract("cards0.unity3d", "out/raw", &ExtractOptions::new())?;
//! extract("cards0.unity3d", "out/decoded", &ExtractOptions::decoded())?;
//! export_card_art("cards0.unity3d", "out/cards")?;
//! # Ok::<(), hsdisunity::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `hsdisunity` command-line binary

pub mod card_art;
pub mod error;
pub mod export;
pub mod formats;
pub mod objects;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::card_art::{CardArt, CardArtCollection, extract_card_art, resolve_card_art};
    pub use crate::error::{Error, Result};
    pub use crate::export::{ExtractMode, ExtractOptions, extract, export_card_art};
    pub use crate::formats::asset::AssetFile;
    pub use crate::formats::cursor::{ByteCursor, ByteOrder};
    pub use crate::objects::{
        CardDef, DecodedObject, GameObject, Material, ObjectMap, ObjectRef, Texture2D, Transform,
        UnityClass, load_objects,
    };
    pub use crate::progress::{Phase, Progress, ProgressCallback};
}
