//! Decoded object dumps

use super::ExtractSummary;
use crate::error::Result;
use crate::formats::asset::AssetFile;
use crate::objects::{DecodedObject, SkipReason, load_objects_with_progress};
use crate::progress::{Phase, Progress, ProgressCallback};
use std::collections::HashSet;
use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

/// Write each decoded object to `<dest>/<Class>/<path_id>.json`.
///
/// Textures also get their image payload written next to the JSON as
/// `<name>.tex`, still in the engine's encoding. The name is reduced to a
/// single path component, and a name already written gets `_<path_id>`
/// appended. Classes without a decoder produce no output and no directory.
///
/// # Errors
/// Returns an error if the object pass aborts or an output file cannot be
/// written.
pub fn extract_decoded<R: Read + Seek>(
    asset: &mut AssetFile<R>,
    dest: &Path,
    progress: ProgressCallback,
) -> Result<ExtractSummary> {
    let loaded = load_objects_with_progress(asset, progress)?;
    let mut summary = ExtractSummary::default();

    for skipped in &loaded.skipped {
        match &skipped.reason {
            SkipReason::Unreadable(message) => summary.errors.push((skipped.path_id, message.clone())),
            SkipReason::Unsupported | SkipReason::Untyped => summary.skipped += 1,
        }
    }

    let total = loaded.objects.len();
    let mut texture_stems = HashSet::new();
    for (index, (path_id, object)) in loaded.objects.iter().enumerate() {
        let class_name = object.class().name();
        progress(&Progress::with_item(
            Phase::WritingFiles,
            index + 1,
            total,
            format!("{class_name}/{path_id}.json"),
        ));

        let dir = dest.join(&*class_name);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{path_id}.json"));
        let mut json = serde_json::to_string_pretty(object)?;
        json.push('\n');
        fs::write(&path, json)?;
        summary.files.push(path);

        if let DecodedObject::Texture2D(texture) = object {
            let mut stem = texture_file_stem(&texture.name, path_id);
            while !texture_stems.insert(stem.to_lowercase()) {
                stem = format!("{stem}_{path_id}");
            }
            let image_path = dir.join(format!("{stem}.tex"));
            fs::write(&image_path, &texture.image_data)?;
            summary.files.push(image_path);
        }
    }

    progress(&Progress::new(Phase::Complete, total, total));
    Ok(summary)
}

/// Reduce a texture name to a file stem that stays inside its directory.
///
/// Path separators and other characters outside `[A-Za-z0-9 _.-]` become
/// `_`. Names that end up empty or made only of dots fall back to the path id.
fn texture_file_stem(name: &str, path_id: i64) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '_' | '.' | '-') {
                ch
            } else {
                '_'
            }
        })
        .collect();

    if stem.chars().all(|ch| ch == '.') {
        path_id.to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_file_stem() {
        assert_eq!(texture_file_stem("hero01_portrait", 7), "hero01_portrait");
        assert_eq!(texture_file_stem("../../escaped", 7), ".._.._escaped");
        assert_eq!(texture_file_stem("a\\b/c:d", 7), "a_b_c_d");
        assert_eq!(texture_file_stem("..", 7), "7");
        assert_eq!(texture_file_stem("   ", 42), "42");
        assert_eq!(texture_file_stem("", 42), "42");
    }

    #[test]
    fn test_texture_file_stem_is_one_component() {
        for name in ["../x", "/abs/path", "C:\\win", "a/../../b", "..", "."] {
            let stem = texture_file_stem(name, 1);
            let path = Path::new("out").join(format!("{stem}.tex"));
            assert_eq!(path.parent(), Some(Path::new("out")), "{name}");
        }
    }
}
