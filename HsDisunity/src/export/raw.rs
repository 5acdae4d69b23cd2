//! Raw object byte dumps

use super::{ExtractOptions, ExtractSummary};
use crate::error::Result;
use crate::formats::asset::{AssetFile, ObjectInfo};
use crate::objects::UnityClass;
use crate::progress::{Phase, Progress, ProgressCallback};
use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

/// Write each object's bytes to `<dest>/<Class>/<path_id>.bin`.
///
/// # Errors
/// Returns an error if an output file cannot be written or the source
/// fails with anything but a per-object range error.
pub fn extract_raw<R: Read + Seek>(
    asset: &mut AssetFile<R>,
    dest: &Path,
    options: &ExtractOptions,
    progress: ProgressCallback,
) -> Result<ExtractSummary> {
    let entries: Vec<(i64, ObjectInfo)> =
        asset.objects().iter().map(|(id, info)| (id, *info)).collect();
    let total = entries.len();
    let mut summary = ExtractSummary::default();

    for (index, (path_id, info)) in entries.into_iter().enumerate() {
        let class = UnityClass::from_id(info.class_id);
        if options.skip_unsupported && !class.is_supported() {
            summary.skipped += 1;
            continue;
        }

        let class_name = class.name();
        progress(&Progress::with_item(
            Phase::WritingFiles,
            index + 1,
            total,
            format!("{class_name}/{path_id}.bin"),
        ));

        let bytes = match asset.read_object_bytes(&info) {
            Ok(bytes) => bytes,
            Err(e) if e.is_object_local() => {
                tracing::warn!("Skipping object {} ({}): {}", path_id, class_name, e);
                summary.errors.push((path_id, e.to_string()));
                continue;
            }
            Err(e) => return Err(e),
        };

        let dir = dest.join(&*class_name);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{path_id}.bin"));
        fs::write(&path, bytes)?;
        summary.files.push(path);
    }

    progress(&Progress::new(Phase::Complete, total, total));
    Ok(summary)
}
