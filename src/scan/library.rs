use super::{discover, load_snapshot};
use crate::analyze::blog::ImageSeoLookup;
use crate::error::Result;
use crate::types::snapshot::{ImageSeoMetadata, MediaAsset, Snapshot};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Image metadata keyed by media filepath. The first record for a path wins.
#[derive(Debug, Clone, Default)]
pub struct MediaLibrary {
    entries: HashMap<String, ImageSeoMetadata>,
}

impl MediaLibrary {
    pub fn from_assets<'a>(assets: impl IntoIterator<Item = &'a MediaAsset>) -> Self {
        let mut library = Self::default();
        for asset in assets {
            library.insert(asset);
        }
        library
    }

    /// Loads media snapshots from a single file or a directory tree. Blog
    /// snapshots found along the way are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let snapshots: Vec<Snapshot> = if path.is_dir() {
            discover(path)?
                .into_iter()
                .map(|file| file.snapshot)
                .collect()
        } else {
            vec![load_snapshot(path)?]
        };
        let library = Self::from_assets(snapshots.iter().filter_map(|snapshot| match snapshot {
            Snapshot::Media(asset) => Some(asset),
            Snapshot::Blog(_) => None,
        }));
        debug!(path = %path.display(), entries = library.len(), "media library loaded");
        Ok(library)
    }

    /// Returns false when the asset has no filepath or the path is taken.
    pub fn insert(&mut self, asset: &MediaAsset) -> bool {
        let Some(filepath) = asset.filepath.as_ref().filter(|path| !path.is_empty()) else {
            return false;
        };
        if self.entries.contains_key(filepath) {
            return false;
        }
        self.entries.insert(filepath.clone(), asset.seo_metadata());
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ImageSeoLookup for MediaLibrary {
    fn lookup_image_seo(&self, image: &str) -> Option<ImageSeoMetadata> {
        self.entries.get(image).cloned()
    }
}
