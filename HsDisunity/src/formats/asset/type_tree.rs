//! Type tree reading
//!
//! The type tree describes the field layout of each serialized type. A
//! type id without an entry is legal: script-derived classes routinely
//! ship without layout metadata.

use super::ASSET_VER_TYPE_TREE_REVISION;
use crate::error::{Error, Result};
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Read, Seek};

/// Meta flag bit: align the stream to 4 bytes after this field
pub const FLAG_ALIGN: u32 = 0x4000;

/// Deepest field nesting accepted before the tree is considered corrupt
const MAX_DEPTH: usize = 64;

/// One node of a type layout: a named, typed field with nested children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeField {
    /// Declared type name (e.g. "GameObject", "int", "vector")
    pub type_name: String,
    /// Field name (e.g. "m_Name", "Base")
    pub name: String,
    /// Serialized size in bytes, -1 for variable size
    pub size: i32,
    /// Flat index of this node within its tree
    pub index: i32,
    pub is_array: bool,
    pub version: i32,
    pub meta_flags: u32,
    pub children: Vec<TypeField>,
}

impl TypeField {
    /// Whether the reader must align to 4 bytes after this field.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.meta_flags & FLAG_ALIGN != 0
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TypeField::node_count).sum::<usize>()
    }

    /// Direct child with the given field name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&TypeField> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Field layouts keyed by type id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeTree {
    /// Engine revision that wrote the tree (version 7+)
    pub revision: Option<String>,
    /// Target platform attributes (version 7+)
    pub attributes: i32,
    pub classes: BTreeMap<i32, TypeField>,
}

impl TypeTree {
    /// Layout for a type id, or `None` if the type is opaque.
    #[must_use]
    pub fn get(&self, type_id: i32) -> Option<&TypeField> {
        self.classes.get(&type_id)
    }

    #[must_use]
    pub fn contains(&self, type_id: i32) -> bool {
        self.classes.contains_key(&type_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Read the type tree for the given asset format version.
///
/// The cursor must already be in the asset's byte order.
pub fn read_type_tree<R: Read + Seek>(cursor: &mut ByteCursor<R>, version: u32) -> Result<TypeTree> {
    let mut tree = TypeTree::default();

    if version >= ASSET_VER_TYPE_TREE_REVISION {
        tree.revision = Some(cursor.read_cstring()?);
        tree.attributes = cursor.read_i32()?;
    }

    let class_count = cursor.read_count("type tree class count")?;
    for _ in 0..class_count {
        let type_id = cursor.read_i32()?;
        let root = read_field(cursor, 0)?;
        if tree.classes.insert(type_id, root).is_some() {
            tracing::debug!("Type tree redefines type {}", type_id);
        }
    }

    if version >= ASSET_VER_TYPE_TREE_REVISION {
        // Trailing padding field
        cursor.read_i32()?;
    }

    tracing::debug!("Type tree: {} classes", tree.len());
    Ok(tree)
}

fn read_field<R: Read + Seek>(cursor: &mut ByteCursor<R>, depth: usize) -> Result<TypeField> {
    if depth > MAX_DEPTH {
        return Err(Error::InvalidLength {
            what: "type tree depth",
            value: depth as i64,
        });
    }

    let type_name = cursor.read_cstring()?;
    let name = cursor.read_cstring()?;
    let size = cursor.read_i32()?;
    let index = cursor.read_i32()?;
    let is_array = cursor.read_i32()? != 0;
    let version = cursor.read_i32()?;
    let meta_flags = cursor.read_u32()?;

    let child_count = cursor.read_count("type tree child count")?;
    let mut children = Vec::with_capacity(child_count.min(256));
    for _ in 0..child_count {
        children.push(read_field(cursor, depth + 1)?);
    }

    Ok(TypeField {
        type_name,
        name,
        size,
        index,
        is_array,
        version,
        meta_flags,
        children,
    })
}
