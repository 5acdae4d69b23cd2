//! Bundle-to-object-table pipeline over a single open source

use super::{
    AssetHeader, ObjectInfo, ObjectInfoTable, TypeTree, read_asset_header,
    read_object_info_table, read_type_tree,
};
use crate::error::Result;
use crate::formats::bundle::{Bundle, read_bundle};
use crate::formats::cursor::{ByteCursor, ByteOrder};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// An opened bundle with its asset metadata decoded.
///
/// Owns the one cursor used for the whole decode pass; object bytes are
/// read by seeking it, and the underlying file is closed when the
/// `AssetFile` is dropped, on success and error paths alike.
pub struct AssetFile<R: Read + Seek> {
    cursor: ByteCursor<R>,
    bundle: Bundle,
    header: AssetHeader,
    type_tree: TypeTree,
    objects: ObjectInfoTable,
    order: ByteOrder,
    data_offset: u64,
}

impl AssetFile<BufReader<File>> {
    /// Open a bundle file and decode its headers, type tree and object table.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::info!("Opening bundle {}", path.as_ref().display());
        Self::from_cursor(ByteCursor::open(path)?)
    }
}

impl<'a> AssetFile<Cursor<&'a [u8]>> {
    /// Decode a bundle held in memory.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::from_cursor(ByteCursor::from_bytes(data))
    }
}

impl<R: Read + Seek> AssetFile<R> {
    /// Run the metadata pipeline: bundle header, asset header, type tree,
    /// object info table.
    pub fn from_cursor(mut cursor: ByteCursor<R>) -> Result<Self> {
        let bundle = read_bundle(&mut cursor)?;
        let header = read_asset_header(&mut cursor, bundle.asset_offset())?;
        let order = cursor.order();
        let type_tree = read_type_tree(&mut cursor, header.version)?;
        let objects = read_object_info_table(&mut cursor, header.version)?;
        let data_offset = bundle.data_region_offset(header.data_offset);

        tracing::info!(
            "Asset '{}': format v{}, {} types, {} objects, data at {}",
            bundle.entry.name,
            header.version,
            type_tree.len(),
            objects.len(),
            data_offset
        );

        Ok(Self {
            cursor,
            bundle,
            header,
            type_tree,
            objects,
            order,
            data_offset,
        })
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn header(&self) -> &AssetHeader {
        &self.header
    }

    pub fn type_tree(&self) -> &TypeTree {
        &self.type_tree
    }

    pub fn objects(&self) -> &ObjectInfoTable {
        &self.objects
    }

    /// Byte order of the object data.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Absolute offset of the object data region.
    pub fn data_offset(&self) -> u64 {
        self.data_offset
    }

    /// Read the raw bytes of one object.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the object's range extends past the
    /// end of the source.
    ///
    /// [`Error::OutOfRange`]: crate::Error::OutOfRange
    pub fn read_object_bytes(&mut self, info: &ObjectInfo) -> Result<Vec<u8>> {
        self.cursor.seek(self.data_offset + u64::from(info.offset))?;
        self.cursor.set_order(self.order);
        self.cursor.read_bytes(info.length as usize)
    }
}
