use thiserror::Error;

/// Failure to encode or decode snapshot bytes
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to encode store: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("Failed to decode store: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    #[error("Snapshot payload is not valid LZ4: {0}")]
    Decompression(#[from] lz4_flex::block::DecompressError),

    #[error("Snapshot is {len} bytes, shorter than its header and checksum")]
    Truncated { len: usize },

    #[error("Snapshot checksum mismatch")]
    ChecksumMismatch,

    #[error("Snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Encoded store is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_limits() {
        assert_eq!(
            SnapshotError::UnsupportedVersion { found: 2, supported: 1 }.to_string(),
            "Snapshot version 2 is newer than supported version 1"
        );
        assert_eq!(
            SnapshotError::TooLarge { size: 300, limit: 256 }.to_string(),
            "Encoded store is 300 bytes, limit is 256"
        );
    }
}
