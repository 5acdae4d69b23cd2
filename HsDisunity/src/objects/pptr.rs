//! Object references

use super::UnityClass;
use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

/// Serialized pointer to another object: `(file_id, path_id)`.
///
/// A `file_id` of 0 means the current asset file; anything else points
/// into an external file this library never opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PPtr {
    pub file_id: i32,
    pub path_id: i64,
}

impl PPtr {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let file_id = cursor.read_i32()?;
        let path_id = i64::from(cursor.read_i32()?);
        Ok(Self { file_id, path_id })
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.file_id == 0 && self.path_id == 0
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.file_id == 0
    }
}

/// A class-tagged reference, as stored in component lists and typed fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectRef {
    pub class_id: i32,
    pub file_id: i32,
    pub path_id: i64,
}

impl ObjectRef {
    #[must_use]
    pub fn new(class_id: i32, path_id: i64) -> Self {
        Self {
            class_id,
            file_id: 0,
            path_id,
        }
    }

    /// Tag a plain pointer with the class its field is declared as.
    #[must_use]
    pub fn typed(class: UnityClass, pptr: PPtr) -> Self {
        Self {
            class_id: class.id(),
            file_id: pptr.file_id,
            path_id: pptr.path_id,
        }
    }

    /// Read a `(class_id, PPtr)` component entry.
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let class_id = cursor.read_i32()?;
        let pptr = PPtr::read(cursor)?;
        Ok(Self {
            class_id,
            file_id: pptr.file_id,
            path_id: pptr.path_id,
        })
    }

    /// Whether the reference points into the current asset file.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.file_id == 0
    }

    #[must_use]
    pub fn class(&self) -> UnityClass {
        UnityClass::from_id(self.class_id)
    }

    #[must_use]
    pub fn pptr(&self) -> PPtr {
        PPtr {
            file_id: self.file_id,
            path_id: self.path_id,
        }
    }
}
