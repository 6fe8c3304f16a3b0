use super::PackageManifest;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Parsed manifests keyed by manifest path.
///
/// Only successful parses are stored, so a manifest that failed to load is
/// retried on the next lookup.
#[derive(Debug, Default)]
pub struct PackageCache {
    entries: RwLock<HashMap<PathBuf, Arc<PackageManifest>>>,
}

impl PackageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, manifest_path: &Path) -> Option<Arc<PackageManifest>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(manifest_path)
            .cloned()
    }

    /// Stores `manifest` unless another caller got there first; returns the
    /// entry that ends up in the cache.
    pub fn insert(
        &self,
        manifest_path: PathBuf,
        manifest: PackageManifest,
    ) -> Arc<PackageManifest> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            entries
                .entry(manifest_path)
                .or_insert_with(|| Arc::new(manifest)),
        )
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
