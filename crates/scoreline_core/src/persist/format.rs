//! Snapshot wire format
//!
//! `[lz4 size-prepended msgpack][sha256 of everything before it]`
//!
//! The payload is the store encoded as MessagePack with field names, so
//! unknown backend fields kept on matches and tournaments survive a round
//! trip.

use super::error::SnapshotError;
use super::SNAPSHOT_VERSION;
use crate::store::Store;
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

const CHECKSUM_LEN: usize = 32;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub version: u32,
    /// Unix milliseconds at capture
    pub timestamp: u64,
    pub store: Store,
}

impl StoreSnapshot {
    pub fn new(store: Store) -> Self {
        Self { version: SNAPSHOT_VERSION, timestamp: current_timestamp(), store }
    }
}

pub fn serialize_and_compress(snapshot: &StoreSnapshot, max_bytes: usize) -> Result<Vec<u8>, SnapshotError> {
    let msgpack = to_vec_named(snapshot)?;
    if msgpack.len() > max_bytes {
        return Err(SnapshotError::TooLarge { size: msgpack.len(), limit: max_bytes });
    }

    let mut bytes = compress_prepend_size(&msgpack);
    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<StoreSnapshot, SnapshotError> {
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(SnapshotError::Truncated { len: bytes.len() });
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if Sha256::digest(payload).as_slice() != checksum {
        return Err(SnapshotError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload)?;
    let snapshot: StoreSnapshot = from_slice(&msgpack)?;

    if snapshot.version > SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion { found: snapshot.version, supported: SNAPSHOT_VERSION });
    }

    Ok(snapshot)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Action;
    use serde_json::json;

    const LIMIT: usize = 1024 * 1024;

    fn sample() -> StoreSnapshot {
        let store = Store::from_value(json!({
            "matches": {
                "matches": [{
                    "league_stage": [{"id": 1, "status_code": "in_progress", "venue": "Riverside"}],
                    "knockout_stage": {"final": [{"id": "f-1", "status_code": "scheduled"}]}
                }]
            },
            "loading": {"operations": {"b": true, "a": false}}
        }))
        .unwrap();
        StoreSnapshot::new(store.apply(Action::Login { token: "t".into(), user: None }))
    }

    #[test]
    fn test_round_trip_keeps_store() {
        let snapshot = sample();
        let bytes = serialize_and_compress(&snapshot, LIMIT).unwrap();
        let decoded = decompress_and_deserialize(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.version, SNAPSHOT_VERSION);
    }

    #[test]
    fn test_checksum_validation() {
        let mut bytes = serialize_and_compress(&sample(), LIMIT).unwrap();
        if let Some(last) = bytes.last_mut() {
            *last = last.wrapping_add(1);
        }
        assert!(matches!(decompress_and_deserialize(&bytes), Err(SnapshotError::ChecksumMismatch)));
    }

    #[test]
    fn test_short_input_is_truncated() {
        assert!(matches!(decompress_and_deserialize(&[0u8; 10]), Err(SnapshotError::Truncated { len: 10 })));
    }

    #[test]
    fn test_bad_payload_with_valid_checksum() {
        // claims 8 decompressed bytes, then an unterminated literal run
        let mut bytes = vec![8, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let checksum = Sha256::digest(&bytes);
        bytes.extend_from_slice(&checksum);
        assert!(matches!(decompress_and_deserialize(&bytes), Err(SnapshotError::Decompression(_))));
    }

    #[test]
    fn test_future_version_rejected() {
        let mut snapshot = sample();
        snapshot.version = SNAPSHOT_VERSION + 1;
        let bytes = serialize_and_compress(&snapshot, LIMIT).unwrap();
        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(SnapshotError::UnsupportedVersion { found, .. }) if found == SNAPSHOT_VERSION + 1
        ));
    }

    #[test]
    fn test_size_limit() {
        assert!(matches!(
            serialize_and_compress(&sample(), 16),
            Err(SnapshotError::TooLarge { limit: 16, .. })
        ));
    }
}
