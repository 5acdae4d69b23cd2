//! Unity asset bundle container
//!
//! The outer container wraps the serialized asset file. Only uncompressed
//! `UnityRaw` bundles holding a single asset file are supported.

mod reader;
mod types;

pub use reader::{read_bundle, read_bundle_entry, read_bundle_header};
pub use types::{Bundle, BundleEntry, BundleHeader};

/// Signature of an uncompressed bundle
pub const SIGNATURE_RAW: &str = "UnityRaw";

/// Signatures of bundle flavours that are recognised but not readable
pub const UNSUPPORTED_SIGNATURES: [&str; 2] = ["UnityWeb", "UnityFS"];

/// Stream version that introduced the complete file size field
pub const STREAM_VER_FILE_SIZE: i32 = 2;

/// Stream version that introduced the data header size field
pub const STREAM_VER_DATA_HEADER: i32 = 3;
