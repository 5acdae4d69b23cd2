//! `GameObject` (class 1)

use super::{ObjectRef, UnityClass};
use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

/// A named scene node and the components attached to it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameObject {
    /// Component references, in declaration order
    pub components: Vec<ObjectRef>,
    pub layer: u32,
    pub name: String,
    pub tag: u16,
    pub is_active: bool,
}

impl GameObject {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let count = cursor.read_count("component count")?;
        let mut components = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            components.push(ObjectRef::read(cursor)?);
        }

        let layer = cursor.read_u32()?;
        let name = cursor.read_aligned_string()?;
        let tag = cursor.read_u16()?;
        let is_active = cursor.read_bool()?;
        cursor.align(4)?;

        Ok(Self {
            components,
            layer,
            name,
            tag,
            is_active,
        })
    }

    /// Whether the name holds anything besides whitespace.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Components of one class, in declaration order.
    pub fn components_of(&self, class: UnityClass) -> impl Iterator<Item = &ObjectRef> {
        self.components.iter().filter(move |c| c.class() == class)
    }
}
