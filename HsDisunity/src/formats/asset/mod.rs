//! Serialized asset file
//!
//! The asset file sits inside a bundle and holds three metadata sections
//! in front of (or, for old formats, behind) the object data:
//!
//! - **Header** - sizes, format version and byte order
//! - **Type tree** - per-type field layouts keyed by type id
//! - **Object info table** - path id to byte range and class id
//!
//! [`AssetFile`] runs the whole pipeline over one open bundle.

mod file;
mod header;
mod object_info;
mod type_tree;

pub use file::AssetFile;
pub use header::{AssetHeader, read_asset_header};
pub use object_info::{ObjectInfo, ObjectInfoTable, read_object_info_table};
pub use type_tree::{TypeField, TypeTree, read_type_tree};

/// Oldest supported asset format version
pub const MIN_ASSET_VERSION: u32 = 5;

/// Newest supported asset format version
pub const MAX_ASSET_VERSION: u32 = 13;

/// Versions below this keep their metadata behind the object data and
/// carry no endianness flag in the header
pub const ASSET_VER_LEADING_METADATA: u32 = 9;

/// Version that added the type tree revision and attributes fields
pub const ASSET_VER_TYPE_TREE_REVISION: u32 = 7;
