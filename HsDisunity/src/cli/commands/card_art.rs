//! CLI command for card art export

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{PICTURE, PhaseBar, print_done, print_step};
use crate::export::{CARD_ART_FILE_NAME, export_card_art_with_progress};

pub fn execute(source: &Path, destination: &Path, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    if !quiet {
        print_step(1, 1, PICTURE, &format!("Resolving card art in {}", source.display()));
    }

    let bar = PhaseBar::new(quiet);
    let cards = export_card_art_with_progress(source, destination, &|p| bar.update(p))
        .with_context(|| format!("failed to export card art from {}", source.display()))?;
    bar.finish();

    if !quiet {
        println!(
            "Wrote {} cards ({} textures) to {}",
            cards.len(),
            cards.texture_names().count(),
            destination.join(CARD_ART_FILE_NAME).display()
        );
        print_done(started.elapsed());
    }

    Ok(())
}
