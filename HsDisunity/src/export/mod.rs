//! Writing bundle contents to disk
//!
//! Three outputs are supported: raw object bytes, decoded objects as JSON,
//! and resolved card art as XML. All of them open the bundle once and read
//! every object through the same cursor.

mod card_art_xml;
mod decoded;
mod options;
mod raw;

pub use card_art_xml::{CARD_ART_FILE_NAME, export_card_art, export_card_art_with_progress, to_xml, write_card_art_xml};
pub use decoded::extract_decoded;
pub use options::{ExtractMode, ExtractOptions};
pub use raw::extract_raw;

use crate::error::Result;
use crate::formats::asset::AssetFile;
use crate::progress::{ProgressCallback, no_progress};
use std::path::{Path, PathBuf};

/// Outcome of an extraction, with support for partial success
#[derive(Debug, Default)]
pub struct ExtractSummary {
    /// Files written, in write order
    pub files: Vec<PathBuf>,
    /// Objects left out on purpose (unsupported or untyped classes)
    pub skipped: usize,
    /// Objects that failed to read or decode (path id, error message)
    pub errors: Vec<(i64, String)>,
}

impl ExtractSummary {
    /// Returns true if every selected object was written
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Extract every object of a bundle into `dest`, one directory per class.
///
/// # Errors
/// Returns an error if the bundle is malformed or an output file cannot be
/// written. Objects whose bytes are out of range are reported in
/// [`ExtractSummary::errors`] instead.
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    options: &ExtractOptions,
) -> Result<ExtractSummary> {
    extract_with_progress(source, dest, options, &no_progress)
}

/// [`extract`] with a progress callback.
///
/// # Errors
/// Same as [`extract`].
pub fn extract_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    options: &ExtractOptions,
    progress: ProgressCallback,
) -> Result<ExtractSummary> {
    tracing::info!(
        "Extracting {:?} → {:?} ({})",
        source.as_ref(),
        dest.as_ref(),
        options.mode.as_str()
    );

    let mut asset = AssetFile::open(source)?;
    let summary = match options.mode {
        ExtractMode::Raw => extract_raw(&mut asset, dest.as_ref(), options, progress)?,
        ExtractMode::Decoded => extract_decoded(&mut asset, dest.as_ref(), progress)?,
    };

    tracing::info!(
        "Extraction complete: {} files, {} skipped, {} errors",
        summary.files.len(),
        summary.skipped,
        summary.errors.len()
    );
    Ok(summary)
}
