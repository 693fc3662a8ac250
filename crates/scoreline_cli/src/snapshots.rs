//! Snapshot files: single paths and a directory of named snapshots

use anyhow::{bail, Context, Result};
use scoreline_core::config::PersistConfig;
use scoreline_core::persist::{decompress_and_deserialize, serialize_and_compress, StoreSnapshot};
use scoreline_core::Store;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SNAPSHOT_EXTENSION: &str = "snap";

/// Write via a temp file and rename, so readers never see a torn snapshot
pub fn save_to_path(path: &Path, snapshot: &StoreSnapshot, max_bytes: usize) -> Result<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let data = serialize_and_compress(snapshot, max_bytes)?;
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path)
            .with_context(|| format!("Failed to create file: {}", temp_path.display()))?;
        file.write_all(&data)?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move snapshot into place: {}", path.display()))?;

    debug!(bytes = data.len(), path = %path.display(), "snapshot written");
    Ok(data.len())
}

pub fn load_from_path(path: &Path) -> Result<StoreSnapshot> {
    let data = fs::read(path).with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let snapshot = decompress_and_deserialize(&data)
        .with_context(|| format!("Failed to decode snapshot: {}", path.display()))?;

    debug!(bytes = data.len(), path = %path.display(), "snapshot read");
    Ok(snapshot)
}

/// Named store snapshots in one directory
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    dir: PathBuf,
    max_bytes: usize,
}

impl SnapshotDir {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self { dir: dir.into(), max_bytes }
    }

    pub fn from_config(config: &PersistConfig) -> Self {
        Self::new(config.dir.clone(), config.max_bytes)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, name: &str, store: &Store) -> Result<StoreSnapshot> {
        let path = self.path_for(name)?;
        let snapshot = StoreSnapshot::new(store.clone());
        save_to_path(&path, &snapshot, self.max_bytes)?;

        info!(name, "store snapshot saved");
        Ok(snapshot)
    }

    pub fn load(&self, name: &str) -> Result<StoreSnapshot> {
        let path = self.path_for(name)?;
        if !path.exists() {
            bail!("no snapshot named '{name}' in {}", self.dir.display());
        }
        let snapshot = load_from_path(&path)?;

        info!(name, version = snapshot.version, "store snapshot loaded");
        Ok(snapshot)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|path| path.exists())
    }

    /// Deleting a missing snapshot is not an error
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("Failed to delete: {}", path.display()))?;
        info!(name, "store snapshot deleted");
        Ok(true)
    }

    /// Names of stored snapshots, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to list snapshots: {}", self.dir.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if is_valid_name(stem) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_name(name) {
            bail!("invalid snapshot name {name:?}: use letters, digits, '_' or '-'");
        }
        Ok(self.dir.join(format!("{name}.{SNAPSHOT_EXTENSION}")))
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
