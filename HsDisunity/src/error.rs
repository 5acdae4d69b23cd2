//! Error types for `HsDisunity`

use thiserror::Error;

/// The error type for `HsDisunity` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Bundle Format Errors ====================
    /// The bundle signature is missing, unterminated or not a Unity bundle.
    #[error("invalid bundle signature: {found:?}")]
    InvalidBundleSignature {
        /// The signature bytes that were read, lossily decoded.
        found: String,
    },

    /// The bundle is a Unity bundle, but a flavour this library cannot read.
    #[error("unsupported bundle signature: {signature} (only UnityRaw is supported)")]
    UnsupportedBundleSignature {
        /// The signature found in the file.
        signature: String,
    },

    /// The bundle does not enclose exactly one asset file.
    #[error("bundle must contain exactly one asset file, found {count}")]
    UnsupportedFileCount {
        /// The declared number of inner files.
        count: i32,
    },

    // ==================== Asset Format Errors ====================
    /// The asset file format version is outside the supported range.
    #[error("unsupported asset format version: {version} (supported: {min}-{max})")]
    UnsupportedAssetVersion {
        /// The version number found in the asset header.
        version: u32,
        /// Lowest supported version.
        min: u32,
        /// Highest supported version.
        max: u32,
    },

    /// The endianness flag is neither 0 (little) nor 1 (big).
    #[error("invalid endianness flag: {flag}")]
    InvalidEndianness {
        /// The raw flag byte.
        flag: u8,
    },

    /// A NUL-terminated string ran past its length limit or the source end.
    #[error("unterminated string at offset {offset}")]
    InvalidString {
        /// Absolute offset where the string started.
        offset: u64,
    },

    /// A count or length field holds a value that cannot be valid.
    #[error("invalid {what}: {value}")]
    InvalidLength {
        /// Name of the offending field.
        what: &'static str,
        /// The raw value.
        value: i64,
    },

    // ==================== Consistency Errors ====================
    /// An object identifier appears twice in one object info table.
    #[error("duplicate object path id: {path_id}")]
    DuplicateObjectId {
        /// The repeated path id.
        path_id: i64,
    },

    // ==================== Range Errors ====================
    /// A seek or read reached beyond the end of the source.
    #[error("out of range: {len} bytes at offset {offset} exceeds source size {size}")]
    OutOfRange {
        /// Absolute offset of the access.
        offset: u64,
        /// Number of bytes requested (0 for a bare seek).
        len: u64,
        /// Total size of the source.
        size: u64,
    },

    // ==================== Export Errors ====================
    /// XML writing error.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// True for errors that only invalidate a single object's decode.
    ///
    /// Everything else aborts the whole asset file.
    #[must_use]
    pub fn is_object_local(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. } | Error::InvalidLength { .. } | Error::Utf8Error(_)
        )
    }
}

/// A specialized Result type for `HsDisunity` operations.
pub type Result<T> = std::result::Result<T, Error>;
