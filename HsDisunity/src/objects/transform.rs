//! `Transform` (class 4)

use super::PPtr;
use super::math::{Quaternionf, Vector3f};
use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

/// Local placement of a game object and its place in the hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transform {
    pub game_object: PPtr,
    pub local_rotation: Quaternionf,
    pub local_position: Vector3f,
    pub local_scale: Vector3f,
    pub children: Vec<PPtr>,
    pub father: PPtr,
}

impl Transform {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let game_object = PPtr::read(cursor)?;
        let local_rotation = Quaternionf::read(cursor)?;
        let local_position = Vector3f::read(cursor)?;
        let local_scale = Vector3f::read(cursor)?;

        let count = cursor.read_count("child count")?;
        let mut children = Vec::with_capacity(count.min(256));
        for _ in 0..count {
            children.push(PPtr::read(cursor)?);
        }

        let father = PPtr::read(cursor)?;

        Ok(Self {
            game_object,
            local_rotation,
            local_position,
            local_scale,
            children,
            father,
        })
    }
}
