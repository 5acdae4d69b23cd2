//! Typed object decoding
//!
//! Objects are decoded by class id. Only the classes needed to resolve
//! card art have decoders; every other class is [`UnityClass::Unsupported`]
//! and skipped.
//!
//! # Layout
//!
//! Each object is read from its own byte buffer, so 4-byte alignment is
//! measured from the start of the object. Strings are an `i32` length
//! followed by UTF-8 bytes, padded to 4. References are `(file_id, path_id)`
//! pairs of `i32`.

mod card_def;
mod class;
mod game_object;
mod loader;
mod map;
pub mod math;
mod material;
mod pptr;
mod texture;
mod transform;

pub use card_def::CardDef;
pub use class::{UnityClass, class_name};
pub use game_object::GameObject;
pub use loader::{LoadedObjects, SkipReason, SkippedObject, load_objects, load_objects_with_progress};
pub use map::ObjectMap;
pub use material::{Material, TexEnv};
pub use pptr::{ObjectRef, PPtr};
pub use texture::Texture2D;
pub use transform::Transform;

use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

/// One decoded object of a supported class
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "class")]
pub enum DecodedObject {
    GameObject(GameObject),
    Transform(Transform),
    Material(Material),
    Texture2D(Texture2D),
    CardDef(CardDef),
}

impl DecodedObject {
    /// Decode one object of the given class.
    ///
    /// Returns `Ok(None)` for classes without a decoder.
    pub fn read<R: Read + Seek>(class: UnityClass, cursor: &mut ByteCursor<R>) -> Result<Option<Self>> {
        let object = match class {
            UnityClass::GameObject => DecodedObject::GameObject(GameObject::read(cursor)?),
            UnityClass::Transform => DecodedObject::Transform(Transform::read(cursor)?),
            UnityClass::Material => DecodedObject::Material(Material::read(cursor)?),
            UnityClass::Texture2D => DecodedObject::Texture2D(Texture2D::read(cursor)?),
            UnityClass::MonoBehaviour => DecodedObject::CardDef(CardDef::read(cursor)?),
            UnityClass::Unsupported(_) => return Ok(None),
        };
        Ok(Some(object))
    }

    #[must_use]
    pub fn class(&self) -> UnityClass {
        match self {
            DecodedObject::GameObject(_) => UnityClass::GameObject,
            DecodedObject::Transform(_) => UnityClass::Transform,
            DecodedObject::Material(_) => UnityClass::Material,
            DecodedObject::Texture2D(_) => UnityClass::Texture2D,
            DecodedObject::CardDef(_) => UnityClass::MonoBehaviour,
        }
    }

    /// The object's own name, for classes that carry one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            DecodedObject::GameObject(go) => Some(&go.name),
            DecodedObject::Material(m) => Some(&m.name),
            DecodedObject::Texture2D(t) => Some(&t.name),
            DecodedObject::CardDef(c) => Some(&c.name),
            DecodedObject::Transform(_) => None,
        }
    }
}
