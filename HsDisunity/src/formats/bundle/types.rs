//! Types for bundle container handling

use serde::Serialize;

/// Outer header of a bundle. All fields are stored big-endian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleHeader {
    /// Magic signature (e.g. "UnityRaw")
    pub signature: String,
    /// Container stream version
    pub stream_version: i32,
    /// Player version string (e.g. "3.x.x")
    pub unity_version: String,
    /// Engine revision string (e.g. "4.5.0f6")
    pub unity_revision: String,
    pub minimum_streamed_bytes: i32,
    /// Size of this header; inner file offsets are relative to it
    pub header_size: u32,
    pub levels_to_download: i32,
    /// `(compressed, uncompressed)` end offsets of each streamed level
    pub level_byte_ends: Vec<(u32, u32)>,
    /// Present from stream version 2
    pub complete_file_size: Option<u32>,
    /// Size of the per-file data header block (0 before stream version 3)
    pub data_header_size: u32,
    /// Number of inner files declared after the header
    pub file_count: i32,
}

/// The single asset file enclosed in a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleEntry {
    /// Name of the asset file (e.g. "CAB-cards0")
    pub name: String,
    /// Offset relative to the end of the bundle header
    pub offset: u32,
    /// Size of the asset file in bytes
    pub size: u32,
}

/// A decoded bundle header together with its only entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    pub header: BundleHeader,
    pub entry: BundleEntry,
}

impl Bundle {
    /// Absolute offset of the inner asset file.
    #[must_use]
    pub fn asset_offset(&self) -> u64 {
        u64::from(self.header.header_size) + u64::from(self.entry.offset)
    }

    /// Absolute offset of the object data region, given the asset header's
    /// data offset.
    #[must_use]
    pub fn data_region_offset(&self, asset_data_offset: u32) -> u64 {
        u64::from(asset_data_offset)
            + u64::from(self.header.data_header_size)
            + u64::from(self.header.header_size)
    }
}
