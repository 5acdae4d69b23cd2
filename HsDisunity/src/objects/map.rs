//! Path id to decoded object table

use super::{CardDef, DecodedObject, GameObject, Material, ObjectRef, Texture2D, Transform};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Decoded objects keyed by path id.
///
/// Cross-references between objects stay plain ids and are resolved
/// through the typed lookups, which return `None` for ids that are absent,
/// external or of another class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectMap {
    objects: IndexMap<i64, DecodedObject>,
    game_objects: Vec<i64>,
}

impl ObjectMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decoded object.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateObjectId`] if the path id is already present.
    pub fn insert(&mut self, path_id: i64, object: DecodedObject) -> Result<()> {
        if self.objects.contains_key(&path_id) {
            return Err(Error::DuplicateObjectId { path_id });
        }
        if matches!(object, DecodedObject::GameObject(_)) {
            self.game_objects.push(path_id);
        }
        self.objects.insert(path_id, object);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, path_id: i64) -> Option<&DecodedObject> {
        self.objects.get(&path_id)
    }

    /// Follow a reference within this asset file.
    #[must_use]
    pub fn resolve(&self, reference: &ObjectRef) -> Option<&DecodedObject> {
        if !reference.is_local() {
            return None;
        }
        self.get(reference.path_id)
    }

    #[must_use]
    pub fn game_object(&self, path_id: i64) -> Option<&GameObject> {
        match self.get(path_id)? {
            DecodedObject::GameObject(go) => Some(go),
            _ => None,
        }
    }

    #[must_use]
    pub fn transform(&self, path_id: i64) -> Option<&Transform> {
        match self.get(path_id)? {
            DecodedObject::Transform(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn material(&self, path_id: i64) -> Option<&Material> {
        match self.get(path_id)? {
            DecodedObject::Material(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn texture(&self, path_id: i64) -> Option<&Texture2D> {
        match self.get(path_id)? {
            DecodedObject::Texture2D(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn card_def(&self, path_id: i64) -> Option<&CardDef> {
        match self.get(path_id)? {
            DecodedObject::CardDef(c) => Some(c),
            _ => None,
        }
    }

    /// Material behind a reference, if it is local and present.
    #[must_use]
    pub fn resolve_material(&self, reference: &ObjectRef) -> Option<&Material> {
        match self.resolve(reference)? {
            DecodedObject::Material(m) => Some(m),
            _ => None,
        }
    }

    /// Card definition behind a reference, if it is local and present.
    #[must_use]
    pub fn resolve_card_def(&self, reference: &ObjectRef) -> Option<&CardDef> {
        match self.resolve(reference)? {
            DecodedObject::CardDef(c) => Some(c),
            _ => None,
        }
    }

    /// Game objects in insertion order.
    pub fn game_objects(&self) -> impl Iterator<Item = (i64, &GameObject)> {
        self.game_objects
            .iter()
            .filter_map(|&id| self.game_object(id).map(|go| (id, go)))
    }

    /// All objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &DecodedObject)> {
        self.objects.iter().map(|(&id, obj)| (id, obj))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
