//! Store snapshot encoding
//! MessagePack + LZ4 with a SHA-256 trailer and a format version.
//! Reading and writing files is left to the caller.

pub mod error;
pub mod format;

pub use error::SnapshotError;
pub use format::{decompress_and_deserialize, serialize_and_compress, StoreSnapshot};

pub const SNAPSHOT_VERSION: u32 = 1;
