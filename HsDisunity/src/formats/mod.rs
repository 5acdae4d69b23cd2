//! Binary container formats: the byte cursor, the outer bundle and the
//! enclosed asset file

pub mod asset;
pub mod bundle;
pub mod cursor;

pub use asset::AssetFile;
pub use bundle::Bundle;
pub use cursor::{ByteCursor, ByteOrder};
