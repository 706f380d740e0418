//! Persisted scores with a staleness window, so `batch` only rescores
//! entities whose inputs changed or whose last check is too old.

use crate::error::Result;
use crate::types::config::SeoConfig;
use crate::types::scoring::{Grade, Score, ScoreResult};
use crate::types::snapshot::{ImageSeoMetadata, Snapshot};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CACHE_FILE: &str = ".seoscore/cache.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedScore {
    pub score: Score,
    pub grade: Grade,
    pub issue_count: usize,
    pub last_checked: DateTime<Utc>,
    pub input_digest: String,
}

impl CachedScore {
    pub fn new(result: &ScoreResult, input_digest: String, now: DateTime<Utc>) -> Self {
        Self {
            score: result.score,
            grade: result.grade,
            issue_count: result.issues.len(),
            last_checked: now,
            input_digest,
        }
    }
}

/// True when there is no entry, the entry is older than `max_age`, or the
/// inputs it was computed from have changed.
pub fn needs_refresh(
    cached: Option<&CachedScore>,
    digest: &str,
    now: DateTime<Utc>,
    max_age: Duration,
) -> bool {
    match cached {
        None => true,
        Some(entry) => now - entry.last_checked > max_age || entry.input_digest != digest,
    }
}

/// SHA-256 over the canonical JSON of the snapshot, plus the featured image
/// metadata when a blog post has one (its score depends on it).
pub fn input_digest(snapshot: &Snapshot, image: Option<&ImageSeoMetadata>) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(snapshot)?);
    if let Some(image) = image {
        hasher.update(b"\0");
        hasher.update(serde_json::to_vec(image)?);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA-256 over everything in the config that can change a score: keyword
/// tiers, tier weights and site hosts.
pub fn rules_digest(config: &SeoConfig) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(&config.tiers())?);
    hasher.update(serde_json::to_vec(&config.weights())?);
    hasher.update(serde_json::to_vec(&config.site_hosts())?);
    Ok(format!("{:x}", hasher.finalize()))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreCache {
    version: String,
    #[serde(default)]
    rules_digest: String,
    entries: BTreeMap<String, CachedScore>,
    #[serde(skip)]
    dirty: bool,
}

impl ScoreCache {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CACHE_FILE)
    }

    /// Missing or unreadable cache files start an empty cache, and so does a
    /// cache written under different scoring rules.
    pub fn load(root: &Path, rules_digest: &str) -> Self {
        let path = Self::path(root);
        let loaded = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<ScoreCache>(&content).ok());
        match loaded {
            Some(cache) if cache.rules_digest == rules_digest => {
                debug!(path = %path.display(), entries = cache.entries.len(), "score cache loaded");
                cache
            }
            Some(stale) => {
                debug!(
                    path = %path.display(),
                    dropped = stale.entries.len(),
                    "scoring rules changed; score cache reset"
                );
                Self::empty(rules_digest, true)
            }
            None => Self::empty(rules_digest, false),
        }
    }

    fn empty(rules_digest: &str, dirty: bool) -> Self {
        Self {
            rules_digest: rules_digest.to_string(),
            dirty,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&CachedScore> {
        self.entries.get(key)
    }

    pub fn record(&mut self, key: impl Into<String>, entry: CachedScore) {
        self.entries.insert(key.into(), entry);
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Writes the cache when it changed; returns the path written.
    pub fn save(&mut self, root: &Path) -> Result<Option<PathBuf>> {
        if !self.dirty {
            return Ok(None);
        }
        let path = Self::path(root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.version = env!("CARGO_PKG_VERSION").to_string();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        self.dirty = false;
        Ok(Some(path))
    }
}
