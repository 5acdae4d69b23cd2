//! Bundle header reading
//!
//! The container header is always big-endian, independent of the byte
//! order the enclosed asset file declares.

use super::{
    Bundle, BundleEntry, BundleHeader, SIGNATURE_RAW, STREAM_VER_DATA_HEADER,
    STREAM_VER_FILE_SIZE, UNSUPPORTED_SIGNATURES,
};
use crate::error::{Error, Result};
use crate::formats::cursor::{ByteCursor, ByteOrder};
use std::io::{Read, Seek};

/// Read the bundle header and its single entry, leaving the cursor at the
/// end of the entry record.
///
/// # Errors
///
/// Returns [`Error::InvalidBundleSignature`] or
/// [`Error::UnsupportedBundleSignature`] for anything but a `UnityRaw`
/// bundle, and [`Error::UnsupportedFileCount`] unless exactly one asset
/// file is enclosed.
pub fn read_bundle<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Bundle> {
    let header = read_bundle_header(cursor)?;
    let entry = read_bundle_entry(cursor)?;
    tracing::debug!(
        "Bundle entry '{}' at +{} ({} bytes)",
        entry.name,
        entry.offset,
        entry.size
    );
    Ok(Bundle { header, entry })
}

/// Read and validate the bundle header, including the inner file count.
pub fn read_bundle_header<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<BundleHeader> {
    cursor.set_order(ByteOrder::Big);
    cursor.seek(0)?;

    let signature = read_signature(cursor)?;
    let stream_version = cursor.read_i32()?;
    let unity_version = cursor.read_cstring()?;
    let unity_revision = cursor.read_cstring()?;
    let minimum_streamed_bytes = cursor.read_i32()?;

    let raw_header_size = cursor.read_i32()?;
    let header_size = u32::try_from(raw_header_size).map_err(|_| Error::InvalidLength {
        what: "bundle header size",
        value: i64::from(raw_header_size),
    })?;

    let levels_to_download = cursor.read_i32()?;
    let level_count = cursor.read_count("level count")?;
    let mut level_byte_ends = Vec::with_capacity(level_count.min(64));
    for _ in 0..level_count {
        let compressed = cursor.read_u32()?;
        let uncompressed = cursor.read_u32()?;
        level_byte_ends.push((compressed, uncompressed));
    }

    let complete_file_size = if stream_version >= STREAM_VER_FILE_SIZE {
        Some(cursor.read_u32()?)
    } else {
        None
    };
    let data_header_size = if stream_version >= STREAM_VER_DATA_HEADER {
        cursor.read_u32()?
    } else {
        0
    };

    // The file list starts right after the declared header size
    cursor.seek(u64::from(header_size))?;
    let file_count = cursor.read_i32()?;
    if file_count != 1 {
        return Err(Error::UnsupportedFileCount { count: file_count });
    }

    tracing::debug!(
        "Bundle {} v{} ({} / {}), header {} bytes, data header {} bytes",
        signature,
        stream_version,
        unity_version,
        unity_revision,
        header_size,
        data_header_size
    );

    Ok(BundleHeader {
        signature,
        stream_version,
        unity_version,
        unity_revision,
        minimum_streamed_bytes,
        header_size,
        levels_to_download,
        level_byte_ends,
        complete_file_size,
        data_header_size,
        file_count,
    })
}

/// Read one inner file record: name, offset and size.
pub fn read_bundle_entry<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<BundleEntry> {
    let name = cursor.read_cstring()?;
    let offset = cursor.read_u32()?;
    let size = cursor.read_u32()?;
    Ok(BundleEntry { name, offset, size })
}

fn read_signature<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<String> {
    let signature = cursor.read_cstring().map_err(|e| match e {
        Error::InvalidString { .. } | Error::OutOfRange { .. } => Error::InvalidBundleSignature {
            found: "<unterminated>".to_string(),
        },
        other => other,
    })?;

    if signature == SIGNATURE_RAW {
        Ok(signature)
    } else if UNSUPPORTED_SIGNATURES.contains(&signature.as_str()) {
        Err(Error::UnsupportedBundleSignature { signature })
    } else {
        Err(Error::InvalidBundleSignature { found: signature })
    }
}
