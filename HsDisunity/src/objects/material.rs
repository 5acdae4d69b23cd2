//! `Material` (class 21)

use super::PPtr;
use super::math::{ColorRgba, Vector2f};
use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use indexmap::IndexMap;
use serde::Serialize;
use std::io::{Read, Seek};

/// A texture binding in a material's property sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TexEnv {
    pub texture: PPtr,
    pub scale: Vector2f,
    pub offset: Vector2f,
}

impl TexEnv {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        Ok(Self {
            texture: PPtr::read(cursor)?,
            scale: Vector2f::read(cursor)?,
            offset: Vector2f::read(cursor)?,
        })
    }
}

/// Shader binding plus named parameters, each map in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Material {
    pub name: String,
    pub shader: PPtr,
    pub shader_keywords: Vec<String>,
    pub custom_render_queue: i32,
    pub tex_envs: IndexMap<String, TexEnv>,
    pub floats: IndexMap<String, f32>,
    pub colors: IndexMap<String, ColorRgba>,
}

impl Material {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let name = cursor.read_aligned_string()?;
        let shader = PPtr::read(cursor)?;

        let keyword_count = cursor.read_count("shader keyword count")?;
        let mut shader_keywords = Vec::with_capacity(keyword_count.min(64));
        for _ in 0..keyword_count {
            shader_keywords.push(cursor.read_aligned_string()?);
        }

        let custom_render_queue = cursor.read_i32()?;
        let tex_envs = read_named(cursor, "texture env count", TexEnv::read)?;
        let floats = read_named(cursor, "float count", |c| c.read_f32())?;
        let colors = read_named(cursor, "color count", ColorRgba::read)?;

        Ok(Self {
            name,
            shader,
            shader_keywords,
            custom_render_queue,
            tex_envs,
            floats,
            colors,
        })
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    #[must_use]
    pub fn tex_env(&self, name: &str) -> Option<&TexEnv> {
        self.tex_envs.get(name)
    }
}

/// Count-prefixed `(name, value)` pairs. A repeated name keeps its first
/// position and takes the last value.
fn read_named<R, T, F>(
    cursor: &mut ByteCursor<R>,
    what: &'static str,
    mut read_value: F,
) -> Result<IndexMap<String, T>>
where
    R: Read + Seek,
    F: FnMut(&mut ByteCursor<R>) -> Result<T>,
{
    let count = cursor.read_count(what)?;
    let mut map = IndexMap::with_capacity(count.min(256));
    for _ in 0..count {
        let key = cursor.read_aligned_string()?;
        let value = read_value(cursor)?;
        map.insert(key, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(out: &mut Vec<u8>, s: &str) {
        out.extend_from_slice(&(s.len() as i32).to_le_bytes());
        out.extend_from_slice(s.as_bytes());
        while out.len() % 4 != 0 {
            out.push(0);
        }
    }

    fn f32s(out: &mut Vec<u8>, values: &[f32]) {
        for v in values {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }

    fn encode() -> Vec<u8> {
        let mut out = Vec::new();
        string(&mut out, "HERO_01_Portrait");
        out.extend_from_slice(&0i32.to_le_bytes());
        out.extend_from_slice(&33i32.to_le_bytes());
        out.extend_from_slice(&1i32.to_le_bytes());
        string(&mut out, "FRESNEL_ON");
        out.extend_from_slice(&(-1i32).to_le_bytes());

        out.extend_from_slice(&1i32.to_le_bytes());
        string(&mut out, "_MainTex");
        out.extend_from_slice(&0i32.to_le_bytes());
        out.extend_from_slice(&700i32.to_le_bytes());
        f32s(&mut out, &[1.0, 1.0, 0.25, 0.5]);

        out.extend_from_slice(&2i32.to_le_bytes());
        string(&mut out, "Fresnel");
        f32s(&mut out, &[0.5]);
        string(&mut out, "_Cutoff");
        f32s(&mut out, &[0.1]);

        out.extend_from_slice(&1i32.to_le_bytes());
        string(&mut out, "_Color");
        f32s(&mut out, &[1.0, 0.5, 0.25, 1.0]);
        out
    }

    #[test]
    fn test_read_material() {
        let data = encode();
        let mut cursor = ByteCursor::from_bytes(&data);
        let material = Material::read(&mut cursor).unwrap();

        assert_eq!(material.name, "HERO_01_Portrait");
        assert_eq!(material.shader.path_id, 33);
        assert_eq!(material.shader_keywords, vec!["FRESNEL_ON".to_string()]);
        assert_eq!(material.custom_render_queue, -1);
        assert_eq!(material.float("Fresnel"), Some(0.5));
        assert_eq!(material.float("missing"), None);

        let keys: Vec<_> = material.floats.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Fresnel", "_Cutoff"]);

        let main = material.tex_env("_MainTex").unwrap();
        assert_eq!(main.texture.path_id, 700);
        assert_eq!(main.offset.y, 0.5);
        assert_eq!(material.colors["_Color"].g, 0.5);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_negative_map_count() {
        let mut data = Vec::new();
        string(&mut data, "m");
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&(-3i32).to_le_bytes());
        let mut cursor = ByteCursor::from_bytes(&data);
        assert!(matches!(
            Material::read(&mut cursor),
            Err(crate::Error::InvalidLength { what: "texture env count", value: -3 })
        ));
    }
}
