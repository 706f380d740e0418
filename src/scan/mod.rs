pub mod filesystem;
pub mod library;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{Result, SeoError};
use crate::types::snapshot::Snapshot;
use filesystem::{extension, list_snapshot_files};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use library::MediaLibrary;

/// A snapshot together with the file it was read from.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

/// Reads one snapshot, choosing the parser by extension.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Err(SeoError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let parse_error = |reason: String| SeoError::SnapshotParse {
        path: path.display().to_string(),
        reason,
    };
    match extension(path).as_deref() {
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => Err(SeoError::UnsupportedSnapshot(path.display().to_string())),
    }
}

/// Like [`load_snapshot`] but rejects a snapshot of the other kind.
pub fn load_snapshot_of_kind(path: &Path, expected: &'static str) -> Result<Snapshot> {
    let snapshot = load_snapshot(path)?;
    if snapshot.kind() != expected {
        return Err(SeoError::SnapshotKind {
            path: path.display().to_string(),
            expected,
        });
    }
    Ok(snapshot)
}

/// Every snapshot under `root`. Files that fail to parse are logged and
/// skipped so one bad file does not sink a batch.
pub fn discover(root: &Path) -> Result<Vec<SnapshotFile>> {
    if !root.is_dir() {
        return Err(SeoError::PathNotFound(root.display().to_string()));
    }
    let mut snapshots = Vec::new();
    for path in list_snapshot_files(root, &[DEFAULT_CONFIG_FILE]) {
        match load_snapshot(&path) {
            Ok(snapshot) => snapshots.push(SnapshotFile { path, snapshot }),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping snapshot"),
        }
    }
    debug!(root = %root.display(), count = snapshots.len(), "snapshots discovered");
    Ok(snapshots)
}
