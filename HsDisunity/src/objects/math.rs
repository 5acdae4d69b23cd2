//! Small fixed-size value types embedded in objects

use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        Ok(Self {
            x: cursor.read_f32()?,
            y: cursor.read_f32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        Ok(Self {
            x: cursor.read_f32()?,
            y: cursor.read_f32()?,
            z: cursor.read_f32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Quaternionf {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternionf {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        Ok(Self {
            x: cursor.read_f32()?,
            y: cursor.read_f32()?,
            z: cursor.read_f32()?,
            w: cursor.read_f32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        Ok(Self {
            r: cursor.read_f32()?,
            g: cursor.read_f32()?,
            b: cursor.read_f32()?,
            a: cursor.read_f32()?,
        })
    }
}
