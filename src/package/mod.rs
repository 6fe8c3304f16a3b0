//! Package manifest model, lookup and caching
//!
//! A package manifest is the nearest `package.json` above an asset. Only the
//! dependency maps matter for pragma detection; everything else is ignored.

mod cache;
mod loader;
mod manifest;

pub use cache::PackageCache;
pub use loader::{PackageLoader, DEFAULT_MANIFEST_NAME};
pub use manifest::PackageManifest;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a manifest that was found on disk
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read package manifest {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse package manifest {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ManifestError::Read { path, .. } | ManifestError::Parse { path, .. } => path,
        }
    }
}
