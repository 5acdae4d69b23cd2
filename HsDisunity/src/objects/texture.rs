//! `Texture2D` (class 28)

use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

/// Texture metadata and its raw, still-encoded image payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Texture2D {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub complete_image_size: i32,
    pub texture_format: i32,
    pub mip_map: bool,
    pub is_readable: bool,
    pub read_allowed: bool,
    pub image_count: i32,
    pub texture_dimension: i32,
    pub filter_mode: i32,
    pub aniso: i32,
    pub mip_bias: f32,
    pub wrap_mode: i32,
    pub lightmap_format: i32,
    pub color_space: i32,
    #[serde(skip)]
    pub image_data: Vec<u8>,
}

impl Texture2D {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let name = cursor.read_aligned_string()?;
        let width = cursor.read_i32()?;
        let height = cursor.read_i32()?;
        let complete_image_size = cursor.read_i32()?;
        let texture_format = cursor.read_i32()?;
        let mip_map = cursor.read_bool()?;
        let is_readable = cursor.read_bool()?;
        let read_allowed = cursor.read_bool()?;
        cursor.align(4)?;

        let image_count = cursor.read_i32()?;
        let texture_dimension = cursor.read_i32()?;
        let filter_mode = cursor.read_i32()?;
        let aniso = cursor.read_i32()?;
        let mip_bias = cursor.read_f32()?;
        let wrap_mode = cursor.read_i32()?;
        let lightmap_format = cursor.read_i32()?;
        let color_space = cursor.read_i32()?;

        let data_len = cursor.read_count("image data size")?;
        let image_data = cursor.read_bytes(data_len)?;

        Ok(Self {
            name,
            width,
            height,
            complete_image_size,
            texture_format,
            mip_map,
            is_readable,
            read_allowed,
            image_count,
            texture_dimension,
            filter_mode,
            aniso,
            mip_bias,
            wrap_mode,
            lightmap_format,
            color_space,
            image_data,
        })
    }

    /// Size of the image payload in bytes.
    #[must_use]
    pub fn image_len(&self) -> usize {
        self.image_data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn encode(image: &[u8], declared_len: i32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&6i32.to_le_bytes());
        out.extend_from_slice(b"HERO01\0\0");
        for v in [256i32, 512, image.len() as i32, 10] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&[1, 0, 1, 0]);
        for v in [1i32, 2, 1, 1] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&0.0f32.to_le_bytes());
        for v in [1i32, 0, 0] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&declared_len.to_le_bytes());
        out.extend_from_slice(image);
        out
    }

    #[test]
    fn test_read_texture() {
        let data = encode(&[0xAB; 24], 24);
        let mut cursor = ByteCursor::from_bytes(&data);
        let texture = Texture2D::read(&mut cursor).unwrap();

        assert_eq!(texture.name, "HERO01");
        assert_eq!(texture.width, 256);
        assert_eq!(texture.height, 512);
        assert_eq!(texture.texture_format, 10);
        assert!(texture.mip_map);
        assert!(!texture.is_readable);
        assert!(texture.read_allowed);
        assert_eq!(texture.wrap_mode, 1);
        assert_eq!(texture.image_len(), 24);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_image_past_end_is_out_of_range() {
        let data = encode(&[0xAB; 8], 64);
        let mut cursor = ByteCursor::from_bytes(&data);
        assert!(matches!(
            Texture2D::read(&mut cursor),
            Err(Error::OutOfRange { len: 64, .. })
        ));
    }
}
