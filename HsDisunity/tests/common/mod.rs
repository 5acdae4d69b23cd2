//! Synthetic bundle builder shared by the integration tests

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

/// Data header block between the file list and the asset file
pub const DATA_HEADER_SIZE: u32 = 64;

/// Growable buffer writing in one byte order
pub struct Out {
    pub buf: Vec<u8>,
    big: bool,
}

impl Out {
    pub fn new(big: bool) -> Self {
        Self { buf: Vec::new(), big }
    }

    pub fn i16(&mut self, v: i16) -> &mut Self {
        if self.big {
            self.buf.write_i16::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_i16::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        if self.big {
            self.buf.write_u16::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_u16::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        if self.big {
            self.buf.write_i32::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_i32::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        if self.big {
            self.buf.write_u32::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_u32::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        if self.big {
            self.buf.write_f32::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_f32::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(data);
        self
    }

    pub fn cstr(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0);
        self
    }

    pub fn align(&mut self) -> &mut Self {
        while self.buf.len() % 4 != 0 {
            self.buf.push(0);
        }
        self
    }

    /// Length-prefixed string padded to 4 bytes.
    pub fn string(&mut self, s: &str) -> &mut Self {
        self.i32(s.len() as i32).bytes(s.as_bytes()).align()
    }

    pub fn pptr(&mut self, path_id: i32) -> &mut Self {
        self.i32(0).i32(path_id)
    }

    pub fn pad_to(&mut self, len: usize) -> &mut Self {
        while self.buf.len() < len {
            self.buf.push(0);
        }
        self
    }
}

// ============================================================================
// Object payloads
// ============================================================================

pub fn game_object(big: bool, name: &str, components: &[(i32, i32)]) -> Vec<u8> {
    let mut out = Out::new(big);
    out.i32(components.len() as i32);
    for &(class_id, path_id) in components {
        out.i32(class_id).pptr(path_id);
    }
    out.u32(0).string(name).u16(0).u8(1).align();
    out.buf
}

pub fn transform(big: bool, game_object: i32) -> Vec<u8> {
    let mut out = Out::new(big);
    out.pptr(game_object);
    for v in [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0] {
        out.f32(v);
    }
    out.i32(0).pptr(0);
    out.buf
}

pub fn card_def(big: bool, texture_path: &str, portrait: i32, deck_bar: i32) -> Vec<u8> {
    let mut out = Out::new(big);
    out.pptr(1).u8(1).align().pptr(0).string("").string(texture_path);
    out.pptr(portrait).pptr(deck_bar);
    out.buf
}

pub fn material(big: bool, name: &str, floats: &[(&str, f32)]) -> Vec<u8> {
    let mut out = Out::new(big);
    out.string(name).pptr(0).i32(0).i32(-1);
    out.i32(1).string("_MainTex").pptr(700);
    for v in [1.0, 1.0, 0.0, 0.0] {
        out.f32(v);
    }
    out.i32(floats.len() as i32);
    for &(key, value) in floats {
        out.string(key).f32(value);
    }
    out.i32(0);
    out.buf
}

pub fn texture(big: bool, name: &str, image: &[u8]) -> Vec<u8> {
    let mut out = Out::new(big);
    out.string(name);
    out.i32(4).i32(4).i32(image.len() as i32).i32(4);
    out.u8(0).u8(0).u8(1).align();
    out.i32(1).i32(2).i32(1).i32(1).f32(0.0).i32(0).i32(0).i32(0);
    out.i32(image.len() as i32).bytes(image);
    out.buf
}

// ============================================================================
// Bundle layout
// ============================================================================

/// One object table entry and its payload
pub struct ObjectEntry {
    pub path_id: i32,
    pub class_id: i16,
    pub type_id: i32,
    pub data: Vec<u8>,
    /// Overrides the table's byte length, for out-of-range entries
    pub length_override: Option<u32>,
}

impl ObjectEntry {
    /// Object whose type id has a type tree entry
    pub fn typed(path_id: i32, class_id: i16, data: Vec<u8>) -> Self {
        Self {
            path_id,
            class_id,
            type_id: i32::from(class_id),
            data,
            length_override: None,
        }
    }

    /// Object whose type id has no type tree entry
    pub fn untyped(path_id: i32, class_id: i16, data: Vec<u8>) -> Self {
        Self {
            type_id: -(path_id.abs()) - 1,
            ..Self::typed(path_id, class_id, data)
        }
    }
}

pub struct BundleBuilder {
    pub version: u32,
    pub big_endian: bool,
    pub file_count: i32,
    pub objects: Vec<ObjectEntry>,
}

impl BundleBuilder {
    pub fn new(version: u32, big_endian: bool) -> Self {
        Self {
            version,
            big_endian,
            file_count: 1,
            objects: Vec::new(),
        }
    }

    pub fn file_count(mut self, count: i32) -> Self {
        self.file_count = count;
        self
    }

    pub fn object(mut self, entry: ObjectEntry) -> Self {
        self.objects.push(entry);
        self
    }

    fn type_tree(&self) -> Vec<u8> {
        let mut out = Out::new(self.big_endian);
        if self.version >= 7 {
            out.cstr("4.6.3f1").i32(5);
        }
        let mut type_ids: Vec<i32> = self
            .objects
            .iter()
            .filter(|o| o.type_id >= 0)
            .map(|o| o.type_id)
            .collect();
        type_ids.sort_unstable();
        type_ids.dedup();

        out.i32(type_ids.len() as i32);
        for type_id in type_ids {
            out.i32(type_id);
            out.cstr("Object").cstr("Base");
            out.i32(-1).i32(0).i32(0).i32(1).u32(0x8000).i32(1);
            out.cstr("string").cstr("m_Name");
            out.i32(-1).i32(1).i32(0).i32(1).u32(0x4000).i32(0);
        }
        if self.version >= 7 {
            out.i32(0);
        }
        out.buf
    }

    /// Object data block and `(offset, length)` per object, relative to
    /// the block start.
    fn object_data(&self) -> (Vec<u8>, Vec<(u32, u32)>) {
        let mut data = Out::new(self.big_endian);
        let mut ranges = Vec::new();
        for entry in &self.objects {
            data.align();
            let offset = data.buf.len() as u32;
            data.bytes(&entry.data);
            ranges.push((offset, entry.length_override.unwrap_or(entry.data.len() as u32)));
        }
        (data.buf, ranges)
    }

    fn object_table(&self, ranges: &[(u32, u32)]) -> Vec<u8> {
        let mut out = Out::new(self.big_endian);
        out.i32(self.objects.len() as i32);
        for (entry, &(offset, length)) in self.objects.iter().zip(ranges) {
            out.i32(entry.path_id)
                .u32(offset)
                .u32(length)
                .i32(entry.type_id)
                .i16(entry.class_id)
                .i16(0);
        }
        out.buf
    }

    /// The asset file, for placement at `asset_offset` within the bundle.
    fn asset(&self, asset_offset: u32) -> Vec<u8> {
        let (data, ranges) = self.object_data();
        let mut metadata = self.type_tree();
        metadata.extend(self.object_table(&ranges));
        let metadata_size = metadata.len() as u32;

        // Header fields are big-endian whatever the asset's byte order
        let mut out = Out::new(true);
        if self.version >= 9 {
            let data_offset = (20 + metadata.len()).next_multiple_of(16) as u32;
            let file_size = data_offset + data.len() as u32;
            out.u32(metadata_size)
                .u32(file_size)
                .u32(self.version)
                .u32(data_offset)
                .u8(u8::from(self.big_endian))
                .bytes(&[0, 0, 0]);
            out.bytes(&metadata);
            out.pad_to(data_offset as usize);
            out.bytes(&data);
        } else {
            let data_offset = 16u32;
            out.u32(metadata_size);
            let file_size_pos = out.buf.len();
            out.u32(0).u32(self.version).u32(data_offset);
            out.bytes(&data);
            // Metadata trails the data at the absolute bundle position
            // file_size - metadata_size + 1
            out.align().u8(0);
            let metadata_start = asset_offset + out.buf.len() as u32;
            let file_size = metadata_start - 1 + metadata_size;
            out.buf[file_size_pos..file_size_pos + 4].copy_from_slice(&file_size.to_be_bytes());
            out.bytes(&metadata);
        }
        out.buf
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Out::new(true);
        out.cstr("UnityRaw").i32(3).cstr("3.x.x").cstr("4.6.3f1").i32(0);
        let header_size_pos = out.buf.len();
        out.i32(0).i32(1).i32(1);
        let level_sizes_pos = out.buf.len();
        out.u32(0).u32(0);
        let complete_size_pos = out.buf.len();
        out.u32(0).u32(DATA_HEADER_SIZE);
        out.align();
        let header_size = out.buf.len() as i32;
        out.buf[header_size_pos..header_size_pos + 4].copy_from_slice(&header_size.to_be_bytes());

        let asset = self.asset(header_size as u32 + DATA_HEADER_SIZE);
        let asset_len = (asset.len() as u32).to_be_bytes();
        out.buf[level_sizes_pos..level_sizes_pos + 4].copy_from_slice(&asset_len);
        out.buf[level_sizes_pos + 4..level_sizes_pos + 8].copy_from_slice(&asset_len);

        out.i32(self.file_count);
        out.cstr("CAB-cards0").u32(DATA_HEADER_SIZE).u32(asset.len() as u32);
        out.pad_to(header_size as usize + DATA_HEADER_SIZE as usize);
        out.bytes(&asset);

        let total = out.buf.len() as u32;
        out.buf[complete_size_pos..complete_size_pos + 4].copy_from_slice(&total.to_be_bytes());
        out.buf
    }
}

/// One hero card: game object 1 -> card def 500 -> material 600, plus a
/// transform, a texture and a shader the resolver never touches.
pub fn hero_bundle(version: u32, big_endian: bool) -> BundleBuilder {
    BundleBuilder::new(version, big_endian)
        .object(ObjectEntry::typed(
            1,
            1,
            game_object(big_endian, "Card_Hero01", &[(4, 2), (114, 500)]),
        ))
        .object(ObjectEntry::typed(2, 4, transform(big_endian, 1)))
        .object(ObjectEntry::untyped(
            500,
            114,
            card_def(big_endian, "textures/hero01_portrait.tex", 600, 0),
        ))
        .object(ObjectEntry::typed(
            600,
            21,
            material(big_endian, "hero01_portrait", &[("Fresnel", 0.5)]),
        ))
        .object(ObjectEntry::typed(700, 28, texture(big_endian, "hero01_portrait", &[7; 16])))
        .object(ObjectEntry::typed(800, 48, vec![0xEE; 12]))
}
