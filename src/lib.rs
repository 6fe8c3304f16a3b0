//! jsxpragma - JSX pragma detection for bundler asset pipelines
//!
//! Given one source file and its owning package, decides whether the Babel
//! JSX transform applies and which factory function ("pragma") it targets.
//!
//! # Core Concepts
//!
//! - **Asset**: a source file with its contents and access to the nearest
//!   `package.json` ([`asset::Asset`])
//! - **Pragma**: the function JSX elements compile to, e.g. `React.createElement`
//!   for React or `h` for Preact ([`jsx::KNOWN_LIBRARIES`])
//! - **Resolution**: manifest dependencies first, then import/require
//!   references in the file contents ([`jsx::JsxResolver`])
//!
//! # Example Usage
//!
//! ```ignore
//! use jsxpragma::{FsAsset, PackageLoader, RealFileSystem, resolve_jsx_config};
//! use std::sync::Arc;
//!
//! async fn config_for(path: &str) -> anyhow::Result<()> {
//!     let loader = Arc::new(PackageLoader::new(Arc::new(RealFileSystem::new())));
//!     let asset = FsAsset::load(path, loader).await?;
//!
//!     match resolve_jsx_config(&asset, true).await? {
//!         Some(config) => println!("pragma: {:?}", config.pragma()),
//!         None => println!("no JSX transform"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod fs;
pub mod jsx;
pub mod package;
pub mod util;

pub use asset::{is_source_module, Asset, FsAsset, MemoryAsset};
pub use config::{ConfigError, JsxPragmaConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use jsx::{resolve_jsx_config, Decision, JsxResolver, Resolution, TransformConfig};
pub use package::{ManifestError, PackageCache, PackageLoader, PackageManifest};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_jsxpragma() {
        assert_eq!(NAME, "jsxpragma");
    }
}
