//! Single pass from the object info table to an [`ObjectMap`]

use super::{DecodedObject, ObjectMap, UnityClass};
use crate::error::Result;
use crate::formats::asset::{AssetFile, ObjectInfo};
use crate::formats::cursor::ByteCursor;
use crate::progress::{Phase, Progress, ProgressCallback, no_progress};
use std::io::{Read, Seek};

/// Why an object table entry did not make it into the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Class has no decoder
    Unsupported,
    /// Type id has no type tree entry and the class is not script data
    Untyped,
    /// The object's bytes could not be read or decoded
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedObject {
    pub path_id: i64,
    pub class_id: i32,
    pub reason: SkipReason,
}

/// Result of decoding an asset file's objects, with support for partial
/// success
#[derive(Debug, Default)]
pub struct LoadedObjects {
    pub objects: ObjectMap,
    pub skipped: Vec<SkippedObject>,
}

impl LoadedObjects {
    /// Returns true if no object failed to decode. Unsupported classes do
    /// not count as failures.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self
            .skipped
            .iter()
            .any(|s| matches!(s.reason, SkipReason::Unreadable(_)))
    }

    /// Entries skipped for the given reason kind.
    pub fn skipped_where<'a>(
        &'a self,
        predicate: impl Fn(&SkipReason) -> bool + 'a,
    ) -> impl Iterator<Item = &'a SkippedObject> {
        self.skipped.iter().filter(move |s| predicate(&s.reason))
    }
}

/// Decode every supported object in the asset file.
///
/// # Errors
/// Format and consistency errors abort the pass. Range and decode errors
/// confined to one object skip that object and are recorded in
/// [`LoadedObjects::skipped`].
pub fn load_objects<R: Read + Seek>(asset: &mut AssetFile<R>) -> Result<LoadedObjects> {
    load_objects_with_progress(asset, &no_progress)
}

/// Decode every supported object, reporting progress per entry.
pub fn load_objects_with_progress<R: Read + Seek>(
    asset: &mut AssetFile<R>,
    progress: ProgressCallback,
) -> Result<LoadedObjects> {
    let entries: Vec<(i64, ObjectInfo)> =
        asset.objects().iter().map(|(id, info)| (id, *info)).collect();
    let total = entries.len();
    let mut loaded = LoadedObjects::default();

    for (index, (path_id, info)) in entries.into_iter().enumerate() {
        let class = UnityClass::from_id(info.class_id);
        progress(&Progress::with_item(
            Phase::DecodingObjects,
            index + 1,
            total,
            format!("{}/{}", class.name(), path_id),
        ));

        let skip = |reason| SkippedObject {
            path_id,
            class_id: info.class_id,
            reason,
        };

        if !class.is_supported() {
            tracing::debug!("Skipping object {} of unsupported class {}", path_id, info.class_id);
            loaded.skipped.push(skip(SkipReason::Unsupported));
            continue;
        }

        if !asset.type_tree().contains(info.type_id) && !class.may_be_untyped() {
            tracing::warn!(
                "Object {} ({}) has no type tree entry for type {}, skipping",
                path_id,
                class.name(),
                info.type_id
            );
            loaded.skipped.push(skip(SkipReason::Untyped));
            continue;
        }

        match decode_entry(asset, &info, class) {
            Ok(Some(object)) => loaded.objects.insert(path_id, object)?,
            Ok(None) => loaded.skipped.push(skip(SkipReason::Unsupported)),
            Err(e) if e.is_object_local() => {
                tracing::warn!("Failed to decode object {} ({}): {}", path_id, class.name(), e);
                loaded.skipped.push(skip(SkipReason::Unreadable(e.to_string())));
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Decoded {} of {} objects ({} skipped)",
        loaded.objects.len(),
        total,
        loaded.skipped.len()
    );
    progress(&Progress::new(Phase::Complete, total, total));
    Ok(loaded)
}

fn decode_entry<R: Read + Seek>(
    asset: &mut AssetFile<R>,
    info: &ObjectInfo,
    class: UnityClass,
) -> Result<Option<DecodedObject>> {
    let bytes = asset.read_object_bytes(info)?;
    let mut cursor = ByteCursor::from_bytes(&bytes).with_order(asset.byte_order());
    DecodedObject::read(class, &mut cursor)
}
