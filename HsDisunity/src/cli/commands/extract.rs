//! CLI command for object extraction

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{PACKAGE, PhaseBar, print_done, print_step};
use crate::export::{ExtractOptions, ExtractSummary, extract_with_progress};

pub fn execute(
    source: &Path,
    destination: &Path,
    options: &ExtractOptions,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    if !quiet {
        print_step(
            1,
            1,
            PACKAGE,
            &format!("Extracting {} ({})", source.display(), options.mode.as_str()),
        );
    }

    let bar = PhaseBar::new(quiet);
    let summary = extract_with_progress(source, destination, options, &|p| bar.update(p))
        .with_context(|| format!("failed to extract {}", source.display()))?;
    bar.finish();

    if !quiet {
        println!(
            "Wrote {} files to {} ({} skipped)",
            summary.files.len(),
            destination.display(),
            summary.skipped
        );
        print_done(started.elapsed());
    }

    ensure_complete(&summary)
}

/// Report per-object failures on stderr, quiet or not, and fail the run
/// when any object could not be written.
fn ensure_complete(summary: &ExtractSummary) -> anyhow::Result<()> {
    if summary.is_complete() {
        return Ok(());
    }
    for (path_id, message) in &summary.errors {
        eprintln!("  object {path_id}: {message}");
    }
    anyhow::bail!(
        "{} of {} objects could not be extracted",
        summary.errors.len(),
        summary.errors.len() + summary.files.len() + summary.skipped
    )
}
