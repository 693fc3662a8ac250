//! Scoreline CLI library
//!
//! Store file → views (JSON out)
//! Store JSON → snapshot (MessagePack + LZ4 + SHA-256)

pub mod config;
pub mod logging;
pub mod query;
pub mod replay;
pub mod snapshots;

use anyhow::{Context, Result};
use scoreline_core::StoreSnapshot;
use scoreline_core::store::access;
use scoreline_core::{Selectors, Store};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

pub use query::{run_query, QueryParams, VIEWS};
pub use replay::{load_actions, replay, ReplayStep};
pub use snapshots::{load_from_path, save_to_path, SnapshotDir, SNAPSHOT_EXTENSION};

/// Snapshot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Snapshot format version
    pub version: u32,
    /// SHA-256 of the whole snapshot file (hex)
    pub checksum: String,
    /// RFC 3339
    pub created_at: String,
    /// Input JSON size (bytes)
    pub original_size: u64,
    /// Snapshot file size (bytes)
    pub compressed_size: u64,
    /// compressed / original
    pub compression_ratio: f64,
}

/// Read a store from JSON, or from a snapshot when the file ends in `.snap`
pub fn load_store(path: &Path) -> Result<Store> {
    if path.extension().and_then(|ext| ext.to_str()) == Some(SNAPSHOT_EXTENSION) {
        return Ok(load_from_path(path)?.store);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read store file: {}", path.display()))?;
    Store::from_json(&json).with_context(|| format!("Failed to decode store: {}", path.display()))
}

/// Encode the store in `input_json` as a snapshot at `output`
pub fn build_snapshot(input_json: &Path, output: &Path, max_bytes: usize) -> Result<SnapshotMetadata> {
    let original_size = fs::metadata(input_json)
        .with_context(|| format!("Failed to read store file: {}", input_json.display()))?
        .len();
    let store = load_store(input_json)?;

    let snapshot = StoreSnapshot::new(store);
    let compressed_size = save_to_path(output, &snapshot, max_bytes)
        .with_context(|| format!("Failed to write snapshot: {}", output.display()))?
        as u64;

    let checksum = file_checksum(output)?;
    info!(path = %output.display(), bytes = compressed_size, "snapshot built");

    Ok(SnapshotMetadata {
        version: snapshot.version,
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio: if original_size == 0 { 0.0 } else { compressed_size as f64 / original_size as f64 },
    })
}

fn file_checksum(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

/// File checksum matches and the snapshot decodes
pub fn verify_snapshot(path: &Path, expected_checksum: &str) -> Result<bool> {
    if file_checksum(path)? != expected_checksum {
        return Ok(false);
    }
    Ok(load_from_path(path).is_ok())
}

/// Counts overview of a store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    pub matches: usize,
    pub live: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub tournaments: usize,
    pub current_tournament_matches: usize,
    pub standing_rows: usize,
    pub authenticated: bool,
    pub following: usize,
    pub followers: usize,
    pub loading: Vec<String>,
    pub forms_with_errors: usize,
}

pub fn summary(selectors: &Selectors, store: &Store) -> StoreSummary {
    let validation = access::validation_slice(store);
    StoreSummary {
        matches: selectors.matches.count(store),
        live: selectors.matches.live_count(store),
        upcoming: selectors.matches.upcoming(store).len(),
        completed: selectors.matches.completed(store).len(),
        tournaments: selectors.tournaments.all(store).len(),
        current_tournament_matches: selectors.tournaments.current_matches_count(store),
        standing_rows: selectors.tournaments.standing(store).len(),
        authenticated: selectors.auth.is_authenticated(store),
        following: selectors.user.following_count(store),
        followers: selectors.user.followers_count(store),
        loading: selectors.loading.loading_operations(store).to_vec(),
        forms_with_errors: validation.forms.values().filter(|errors| !errors.is_empty()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const STORE_JSON: &str = r#"{
        "matches": {
            "matches": [{
                "league_stage": [
                    {"id": 1, "status_code": "in_progress"},
                    {"id": 2, "status_code": "completed"}
                ],
                "knockout_stage": {"final": [{"id": 3, "status_code": "scheduled"}]}
            }]
        },
        "auth": {"token": "abc"},
        "loading": {"operations": {"fetchMatches": true, "fetchUser": false}},
        "validation": {"forms": {"login": {"email": "required"}, "signup": {}}}
    }"#;

    fn write_store(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("store.json");
        fs::write(&path, STORE_JSON).unwrap();
        path
    }

    #[test]
    fn test_build_and_verify_snapshot() {
        let dir = TempDir::new().unwrap();
        let input = write_store(&dir);
        let output = dir.path().join("out").join("store.snap");

        let meta = build_snapshot(&input, &output, 1024 * 1024).unwrap();
        assert!(output.exists());
        assert_eq!(meta.checksum.len(), 64);
        assert_eq!(meta.version, scoreline_core::persist::SNAPSHOT_VERSION);
        assert!(verify_snapshot(&output, &meta.checksum).unwrap());
        assert!(!verify_snapshot(&output, "00").unwrap());

        // .snap files load through the snapshot decoder
        let from_snapshot = load_store(&output).unwrap();
        assert_eq!(from_snapshot, load_store(&input).unwrap());
    }

    #[test]
    fn test_summary_counts() {
        let dir = TempDir::new().unwrap();
        let store = load_store(&write_store(&dir)).unwrap();
        let overview = summary(&Selectors::default(), &store);

        assert_eq!(overview.matches, 3);
        assert_eq!(overview.live, 1);
        assert_eq!(overview.upcoming, 1);
        assert_eq!(overview.completed, 1);
        assert!(overview.authenticated);
        assert_eq!(overview.loading, vec!["fetchMatches".to_string()]);
        assert_eq!(overview.forms_with_errors, 1);
    }

    #[test]
    fn test_load_store_errors_carry_path() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"matches": {"matches": 7}}"#).unwrap();

        let err = load_store(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        assert!(load_store(&dir.path().join("missing.json")).is_err());
    }
}
