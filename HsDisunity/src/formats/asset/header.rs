//! Asset header reading

use super::{ASSET_VER_LEADING_METADATA, MAX_ASSET_VERSION, MIN_ASSET_VERSION};
use crate::error::{Error, Result};
use crate::formats::cursor::{ByteCursor, ByteOrder};
use serde::Serialize;
use std::io::{Read, Seek};

/// Header of the serialized asset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetHeader {
    /// Size of the type tree + object info metadata block
    pub metadata_size: u32,
    /// Size of the whole asset file
    pub file_size: u32,
    /// Serialization format version
    pub version: u32,
    /// Offset of the object data, relative to the data region base
    pub data_offset: u32,
    /// 0 = little-endian, 1 = big-endian. Always 0 before version 9.
    pub endianness: u8,
    /// Padding after the endianness flag (version 9+)
    pub reserved: [u8; 3],
}

impl AssetHeader {
    /// Byte order of everything after the header.
    pub fn byte_order(&self) -> Result<ByteOrder> {
        ByteOrder::from_flag(self.endianness)
    }

    /// Whether the metadata trails the object data (versions before 9).
    #[must_use]
    pub fn has_trailing_metadata(&self) -> bool {
        self.version < ASSET_VER_LEADING_METADATA
    }
}

/// Read the asset header at `asset_offset` and leave the cursor at the
/// start of the type tree, switched to the asset's byte order.
///
/// The header fields themselves are big-endian. For versions below 9 the
/// cursor additionally seeks to the absolute position
/// `file_size - metadata_size + 1`, not offset by `asset_offset`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAssetVersion`] outside versions 5-13,
/// [`Error::InvalidEndianness`] for a flag other than 0 or 1 and
/// [`Error::OutOfRange`] if the legacy metadata offset lies past the end
/// of the source.
pub fn read_asset_header<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    asset_offset: u64,
) -> Result<AssetHeader> {
    cursor.set_order(ByteOrder::Big);
    cursor.seek(asset_offset)?;

    let metadata_size = cursor.read_u32()?;
    let file_size = cursor.read_u32()?;
    let version = cursor.read_u32()?;
    let data_offset = cursor.read_u32()?;

    if !(MIN_ASSET_VERSION..=MAX_ASSET_VERSION).contains(&version) {
        return Err(Error::UnsupportedAssetVersion {
            version,
            min: MIN_ASSET_VERSION,
            max: MAX_ASSET_VERSION,
        });
    }

    let (endianness, reserved) = if version >= ASSET_VER_LEADING_METADATA {
        let flag = cursor.read_u8()?;
        let mut reserved = [0u8; 3];
        cursor.read_exact(&mut reserved)?;
        (flag, reserved)
    } else {
        (0, [0u8; 3])
    };

    let header = AssetHeader {
        metadata_size,
        file_size,
        version,
        data_offset,
        endianness,
        reserved,
    };
    let order = header.byte_order()?;
    cursor.set_order(order);

    if header.has_trailing_metadata() {
        let legacy_offset = u64::from(file_size)
            .checked_sub(u64::from(metadata_size))
            .ok_or(Error::InvalidLength {
                what: "asset metadata size",
                value: i64::from(metadata_size),
            })?
            + 1;
        tracing::debug!(
            "Asset version {} keeps metadata at the end, seeking to {}",
            version,
            legacy_offset
        );
        cursor.seek(legacy_offset)?;
    }

    tracing::debug!(
        "Asset header: version {}, {}, file {} bytes, metadata {} bytes, data at +{}",
        version,
        order.as_str(),
        file_size,
        metadata_size,
        data_offset
    );

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(metadata_size: u32, file_size: u32, version: u32, flag: u8) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&metadata_size.to_be_bytes());
        out.extend_from_slice(&file_size.to_be_bytes());
        out.extend_from_slice(&version.to_be_bytes());
        out.extend_from_slice(&32u32.to_be_bytes());
        if version >= 9 {
            out.extend_from_slice(&[flag, 0, 0, 0]);
        }
        out
    }

    #[test]
    fn test_version_9_reads_flag_and_stays_put() {
        let mut data = vec![0xAA; 8];
        data.extend(header_bytes(40, 200, 9, 0));
        data.resize(300, 0);
        let mut cursor = ByteCursor::from_bytes(&data);

        let header = read_asset_header(&mut cursor, 8).unwrap();
        assert_eq!(header.version, 9);
        assert_eq!(header.data_offset, 32);
        assert!(!header.has_trailing_metadata());
        assert_eq!(cursor.order(), ByteOrder::Little);
        // No legacy seek: right after the 20-byte header
        assert_eq!(cursor.position(), 8 + 20);
    }

    #[test]
    fn test_big_endian_flag_switches_order() {
        let mut data = header_bytes(40, 200, 9, 1);
        data.resize(200, 0);
        let mut cursor = ByteCursor::from_bytes(&data);
        let header = read_asset_header(&mut cursor, 0).unwrap();
        assert_eq!(header.endianness, 1);
        assert_eq!(cursor.order(), ByteOrder::Big);
    }

    #[test]
    fn test_version_8_seeks_to_trailing_metadata() {
        let mut data = vec![0xAA; 8];
        data.extend(header_bytes(40, 200, 8, 0));
        data.resize(300, 0);
        let mut cursor = ByteCursor::from_bytes(&data);

        let header = read_asset_header(&mut cursor, 8).unwrap();
        assert!(header.has_trailing_metadata());
        assert_eq!(header.endianness, 0);
        assert_eq!(cursor.order(), ByteOrder::Little);
        assert_eq!(cursor.position(), 200 - 40 + 1);
    }

    #[test]
    fn test_legacy_seek_ignores_asset_offset() {
        for asset_offset in [0u64, 8, 64] {
            let mut data = vec![0xAA; asset_offset as usize];
            data.extend(header_bytes(40, 200, 8, 0));
            data.resize(300, 0);
            let mut cursor = ByteCursor::from_bytes(&data);
            read_asset_header(&mut cursor, asset_offset).unwrap();
            assert_eq!(cursor.position(), 161, "asset at {asset_offset}");
        }
    }

    #[test]
    fn test_legacy_offset_past_end_is_out_of_range() {
        let mut data = header_bytes(10, 5000, 8, 0);
        data.resize(64, 0);
        let mut cursor = ByteCursor::from_bytes(&data);
        assert!(matches!(
            read_asset_header(&mut cursor, 0),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_unsupported_versions() {
        for version in [4, 14, 22] {
            let mut data = header_bytes(0, 0, version, 0);
            data.resize(64, 0);
            let mut cursor = ByteCursor::from_bytes(&data);
            assert!(matches!(
                read_asset_header(&mut cursor, 0),
                Err(Error::UnsupportedAssetVersion { version: v, .. }) if v == version
            ));
        }
    }

    #[test]
    fn test_invalid_endianness_flag() {
        let mut data = header_bytes(40, 200, 9, 7);
        data.resize(64, 0);
        let mut cursor = ByteCursor::from_bytes(&data);
        assert!(matches!(
            read_asset_header(&mut cursor, 0),
            Err(Error::InvalidEndianness { flag: 7 })
        ));
    }
}
