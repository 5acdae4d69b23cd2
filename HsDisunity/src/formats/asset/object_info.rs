//! Object info table reading

use crate::error::{Error, Result};
use crate::formats::cursor::ByteCursor;
use indexmap::IndexMap;
use serde::Serialize;
use std::io::{Read, Seek};

/// Location and class of one serialized object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectInfo {
    /// Offset from the start of the data region
    pub offset: u32,
    /// Length of the object's bytes
    pub length: u32,
    /// Key into the type tree
    pub type_id: i32,
    /// Engine class id (1 = GameObject, 114 = MonoBehaviour, ...)
    pub class_id: i32,
    /// Stored for completeness, never set in shipped bundles
    pub is_destroyed: i16,
}

/// Path id to object info, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectInfoTable {
    entries: IndexMap<i64, ObjectInfo>,
}

impl ObjectInfoTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateObjectId`] if the path id is already present.
    pub fn insert(&mut self, path_id: i64, info: ObjectInfo) -> Result<()> {
        if self.entries.contains_key(&path_id) {
            return Err(Error::DuplicateObjectId { path_id });
        }
        self.entries.insert(path_id, info);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, path_id: i64) -> Option<&ObjectInfo> {
        self.entries.get(&path_id)
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &ObjectInfo)> {
        self.entries.iter().map(|(&id, info)| (id, info))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read the object info table.
///
/// The entry layout is the same for every version in
/// `MIN_ASSET_VERSION..=MAX_ASSET_VERSION`; `version` is only logged.
///
/// Byte ranges are not checked against the asset size here; the read that
/// later seeks to them reports [`Error::OutOfRange`].
///
/// # Errors
/// Returns [`Error::DuplicateObjectId`] if a path id repeats.
pub fn read_object_info_table<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    version: u32,
) -> Result<ObjectInfoTable> {
    let count = cursor.read_count("object count")?;
    let mut table = ObjectInfoTable::new();

    for _ in 0..count {
        let path_id = i64::from(cursor.read_i32()?);
        let offset = cursor.read_u32()?;
        let length = cursor.read_u32()?;
        let type_id = cursor.read_i32()?;
        let class_id = i32::from(cursor.read_i16()?);
        let is_destroyed = cursor.read_i16()?;

        table.insert(
            path_id,
            ObjectInfo {
                offset,
                length,
                type_id,
                class_id,
                is_destroyed,
            },
        )?;
    }

    tracing::debug!("Object info table (v{}): {} objects", version, table.len());
    Ok(table)
}
