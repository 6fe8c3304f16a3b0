use super::{ManifestError, PackageCache, PackageManifest};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// Locates and loads the package manifest owning a file.
///
/// The owning manifest is the first `package.json` found walking up from the
/// file's directory. Nested packages shadow their parents.
pub struct PackageLoader {
    fs: Arc<dyn FileSystem>,
    manifest_name: String,
    cache: Option<PackageCache>,
}

impl PackageLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            cache: Some(PackageCache::new()),
        }
    }

    pub fn with_manifest_name(mut self, manifest_name: impl Into<String>) -> Self {
        self.manifest_name = manifest_name.into();
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    pub fn cache(&self) -> Option<&PackageCache> {
        self.cache.as_ref()
    }

    /// Returns the path of the nearest manifest at or above `start_dir`.
    pub fn find_manifest(&self, start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(&self.manifest_name))
            .inspect(|candidate| trace!("Checking for manifest at {}", candidate.display()))
            .find(|candidate| self.fs.is_file(candidate))
    }

    /// Loads the manifest owning `file_path`, or `None` when the file is not
    /// inside any package.
    pub fn load_for(
        &self,
        file_path: &Path,
    ) -> Result<Option<Arc<PackageManifest>>, ManifestError> {
        let start_dir = file_path.parent().unwrap_or(Path::new(""));

        match self.find_manifest(start_dir) {
            Some(manifest_path) => self.load(&manifest_path).map(Some),
            None => {
                debug!("No {} found above {}", self.manifest_name, file_path.display());
                Ok(None)
            }
        }
    }

    /// Reads and parses the manifest at `manifest_path`, going through the
    /// cache when enabled.
    pub fn load(&self, manifest_path: &Path) -> Result<Arc<PackageManifest>, ManifestError> {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(manifest_path)) {
            trace!("Manifest cache hit: {}", manifest_path.display());
            return Ok(cached);
        }

        let content = self
            .fs
            .read_to_string(manifest_path)
            .map_err(|source| ManifestError::Read {
                path: manifest_path.to_path_buf(),
                source,
            })?;

        let manifest = PackageManifest::parse(&content).map_err(|source| ManifestError::Parse {
            path: manifest_path.to_path_buf(),
            source,
        })?;

        debug!(
            "Loaded manifest {} ({} dependencies)",
            manifest_path.display(),
            manifest.dependency_names().count()
        );

        Ok(match &self.cache {
            Some(cache) => cache.insert(manifest_path.to_path_buf(), manifest),
            None => Arc::new(manifest),
        })
    }
}
