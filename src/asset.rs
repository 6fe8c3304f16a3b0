//! Assets handed to the JSX pipeline
//!
//! An asset is one source file: its path, its raw contents and access to the
//! manifest of the package that owns it. Fetching the manifest is the only
//! asynchronous step of pragma detection.

use crate::package::{PackageLoader, PackageManifest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[async_trait]
pub trait Asset: Send + Sync {
    fn path(&self) -> &Path;

    fn contents(&self) -> &str;

    /// Manifest of the owning package, `None` when there is none.
    /// Lookup failures are returned as errors, never swallowed.
    async fn package(&self) -> Result<Option<Arc<PackageManifest>>>;
}

/// A file on disk whose manifest is found through a shared [`PackageLoader`].
pub struct FsAsset {
    path: PathBuf,
    contents: String,
    loader: Arc<PackageLoader>,
}

impl FsAsset {
    pub fn new(
        path: impl Into<PathBuf>,
        contents: impl Into<String>,
        loader: Arc<PackageLoader>,
    ) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            loader,
        }
    }

    /// Reads the file at `path` through the loader's file system. Invalid
    /// UTF-8 sequences are replaced with U+FFFD rather than rejected.
    pub async fn load(path: impl Into<PathBuf>, loader: Arc<PackageLoader>) -> Result<Self> {
        let path = path.into();
        let fs = Arc::clone(loader.fs());
        let read_path = path.clone();

        let bytes = tokio::task::spawn_blocking(move || fs.read(&read_path))
            .await
            .context("Asset read task panicked")?
            .with_context(|| format!("Failed to read asset {}", path.display()))?;
        let contents = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Self::new(path, contents, loader))
    }
}

#[async_trait]
impl Asset for FsAsset {
    fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    async fn package(&self) -> Result<Option<Arc<PackageManifest>>> {
        let loader = Arc::clone(&self.loader);
        let path = self.path.clone();

        let manifest = tokio::task::spawn_blocking(move || loader.load_for(&path))
            .await
            .context("Manifest load task panicked")??;

        Ok(manifest)
    }
}

/// An asset held entirely in memory, for embedders that already have the
/// file contents and manifest at hand.
#[derive(Debug, Clone)]
pub struct MemoryAsset {
    path: PathBuf,
    contents: String,
    package: Option<Arc<PackageManifest>>,
}

impl MemoryAsset {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            package: None,
        }
    }

    pub fn with_package(mut self, manifest: PackageManifest) -> Self {
        self.package = Some(Arc::new(manifest));
        self
    }

    pub fn with_package_json(self, json: &str) -> Result<Self> {
        let manifest = PackageManifest::parse(json).context("Invalid package manifest JSON")?;
        Ok(self.with_package(manifest))
    }
}

#[async_trait]
impl Asset for MemoryAsset {
    fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    async fn package(&self) -> Result<Option<Arc<PackageManifest>>> {
        Ok(self.package.clone())
    }
}

/// Whether `path` belongs to the project's own source tree. Any path
/// component equal to one of `vendor_dirs` marks the file as third-party.
pub fn is_source_module<S: AsRef<str>>(path: &Path, vendor_dirs: &[S]) -> bool {
    !path.components().any(|component| match component {
        Component::Normal(name) => vendor_dirs
            .iter()
            .any(|vendor| name.to_str() == Some(vendor.as_ref())),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[tokio::test]
    async fn test_memory_asset_without_package() {
        let asset = MemoryAsset::new("index.js", "console.log(1)");
        assert_eq!(asset.contents(), "console.log(1)");
        assert!(asset.package().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_asset_with_package_json() {
        let asset = MemoryAsset::new("index.js", "")
            .with_package_json(r#"{"dependencies": {"preact": "^10.0.0"}}"#)
            .unwrap();

        let manifest = asset.package().await.unwrap().unwrap();
        assert!(manifest.has_dependency("preact"));
    }

    #[test]
    fn test_memory_asset_rejects_invalid_json() {
        assert!(MemoryAsset::new("index.js", "")
            .with_package_json("{ broken")
            .is_err());
    }

    #[tokio::test]
    async fn test_fs_asset_load_reads_contents_and_package() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"devDependencies": {"react": "18.2.0"}}"#);
        fs.add_file("src/App.js", "export default 1;");
        let loader = Arc::new(PackageLoader::new(Arc::new(fs)));

        let asset = FsAsset::load("/mock/src/App.js", loader).await.unwrap();
        assert_eq!(asset.contents(), "export default 1;");
        assert_eq!(asset.path(), Path::new("/mock/src/App.js"));

        let manifest = asset.package().await.unwrap().unwrap();
        assert!(manifest.has_dependency("react"));
    }

    #[tokio::test]
    async fn test_fs_asset_load_decodes_invalid_utf8_lossily() {
        let fs = MockFileSystem::new();
        fs.add_bytes("src/legacy.js", b"// caf\xe9\nimport React from 'react';");
        let loader = Arc::new(PackageLoader::new(Arc::new(fs)));

        let asset = FsAsset::load("/mock/src/legacy.js", loader).await.unwrap();
        assert_eq!(asset.contents(), "// caf\u{FFFD}\nimport React from 'react';");
    }

    #[tokio::test]
    async fn test_fs_asset_load_missing_file() {
        let loader = Arc::new(PackageLoader::new(Arc::new(MockFileSystem::new())));

        let err = FsAsset::load("/mock/missing.js", loader)
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to read asset"));
    }

    #[tokio::test]
    async fn test_fs_asset_package_error_propagates() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{ not json");
        let loader = Arc::new(PackageLoader::new(Arc::new(fs)));

        let asset = FsAsset::new("/mock/index.js", "", loader);
        let err = asset.package().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse package manifest"));
    }

    #[test]
    fn test_is_source_module() {
        let vendor = ["node_modules"];

        assert!(is_source_module(Path::new("/repo/src/App.jsx"), &vendor));
        assert!(is_source_module(Path::new("src/node_modules_backup/a.js"), &vendor));
        assert!(!is_source_module(
            Path::new("/repo/node_modules/react/index.js"),
            &vendor
        ));
        assert!(!is_source_module(
            Path::new("node_modules/preact/dist/preact.js"),
            &vendor
        ));
    }

    #[test]
    fn test_is_source_module_custom_vendor_dirs() {
        let vendor = vec!["vendor".to_string(), "bower_components".to_string()];

        assert!(!is_source_module(Path::new("/repo/vendor/lib.js"), &vendor));
        assert!(!is_source_module(
            Path::new("/repo/bower_components/x/index.js"),
            &vendor
        ));
        assert!(is_source_module(Path::new("/repo/node_modules/x.js"), &vendor));
    }
}
