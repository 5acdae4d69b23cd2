//! Game object to card art resolution

use super::{CardArt, CardArtCollection};
use crate::error::Result;
use crate::formats::asset::AssetFile;
use crate::objects::{
    GameObject, Material, ObjectMap, ObjectRef, UnityClass, load_objects_with_progress,
};
use crate::progress::{Phase, Progress, ProgressCallback, no_progress};
use std::path::Path;

/// Open a cards bundle, decode its objects and resolve its card art.
///
/// # Errors
/// Returns an error if the bundle cannot be opened or its headers, type
/// tree or object table are malformed.
pub fn extract_card_art<P: AsRef<Path>>(source: P) -> Result<CardArtCollection> {
    extract_card_art_with_progress(source, &no_progress)
}

/// [`extract_card_art`] with a progress callback.
///
/// # Errors
/// Returns an error if the bundle cannot be opened or is malformed.
pub fn extract_card_art_with_progress<P: AsRef<Path>>(
    source: P,
    progress: ProgressCallback,
) -> Result<CardArtCollection> {
    let mut asset = AssetFile::open(source)?;
    let loaded = load_objects_with_progress(&mut asset, progress)?;
    Ok(resolve_card_art_with_progress(&loaded.objects, progress))
}

/// Resolve card art from decoded objects.
///
/// Only reads the map, so repeated calls give identical results.
#[must_use]
pub fn resolve_card_art(objects: &ObjectMap) -> CardArtCollection {
    resolve_card_art_with_progress(objects, &no_progress)
}

/// [`resolve_card_art`] with a progress callback, one update per game object.
#[must_use]
pub fn resolve_card_art_with_progress(
    objects: &ObjectMap,
    progress: ProgressCallback,
) -> CardArtCollection {
    let game_objects: Vec<(i64, &GameObject)> = objects.game_objects().collect();
    let total = game_objects.len();
    let mut cards = CardArtCollection::new();

    for (index, (path_id, game_object)) in game_objects.into_iter().enumerate() {
        progress(&Progress::with_item(
            Phase::ResolvingCards,
            index + 1,
            total,
            game_object.name.as_str(),
        ));

        if !game_object.has_name() {
            continue;
        }

        for component in game_object.components_of(UnityClass::MonoBehaviour) {
            if let Some(card) = resolve_component(objects, game_object, component) {
                cards.push(card);
            } else {
                tracing::trace!("Game object {} component {} gave no card", path_id, component.path_id);
            }
        }
    }

    tracing::info!("Resolved {} card art records from {} game objects", cards.len(), total);
    progress(&Progress::new(Phase::Complete, total, total));
    cards
}

fn resolve_component(
    objects: &ObjectMap,
    game_object: &GameObject,
    component: &ObjectRef,
) -> Option<CardArt> {
    let Some(card_def) = objects.resolve_card_def(component) else {
        tracing::warn!(
            "'{}': card definition {} not found",
            game_object.name,
            component.path_id
        );
        return None;
    };

    let texture_name = texture_base_name(&card_def.portrait_texture_path);
    if texture_name.is_empty() {
        tracing::debug!("'{}': card definition has no portrait texture", game_object.name);
        return None;
    }

    Some(CardArt {
        name: game_object.name.clone(),
        portrait_path: card_def.portrait_texture_path.clone(),
        texture_name: texture_name.to_string(),
        portrait: lookup_material(objects, game_object, "portrait", &card_def.enchantment_portrait),
        deck_bar: lookup_material(objects, game_object, "deck bar", &card_def.deck_card_bar_portrait),
    })
}

fn lookup_material(
    objects: &ObjectMap,
    game_object: &GameObject,
    slot: &str,
    reference: &ObjectRef,
) -> Option<Material> {
    if reference.path_id == 0 {
        return None;
    }
    let material = objects.resolve_material(reference);
    if material.is_none() {
        tracing::warn!(
            "'{}': {} material {} not found",
            game_object.name,
            slot,
            reference.path_id
        );
    }
    material.cloned()
}

/// File name of a texture path without its extension.
///
/// Both `/` and `\` separate directories.
#[must_use]
pub fn texture_base_name(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    }
}
