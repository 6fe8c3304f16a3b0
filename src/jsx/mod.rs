//! JSX pragma detection
//!
//! Decides whether a single asset gets the Babel JSX transform and which
//! factory function it targets. The decision runs as a fixed chain:
//!
//! 1. [`scope`]: vendored code is never transformed.
//! 2. [`resolver::ManifestResolver`]: known libraries declared by the owning
//!    package, in [`pragma::KNOWN_LIBRARIES`] order.
//! 3. [`resolver::ContentScanner`]: import/require references in the source,
//!    only consulted when the manifest gave nothing.
//! 4. [`transform::assemble`]: a config is emitted when a pragma resolved or
//!    the extension is JSX-bearing.
//!
//! # Example
//!
//! ```no_run
//! use jsxpragma::asset::MemoryAsset;
//! use jsxpragma::jsx::resolve_jsx_config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let asset = MemoryAsset::new("widget.js", "")
//!     .with_package_json(r#"{"dependencies": {"preact": "^10.0.0"}}"#)?;
//!
//! let config = resolve_jsx_config(&asset, true).await?;
//! assert_eq!(config.unwrap().pragma(), Some("h"));
//! # Ok(())
//! # }
//! ```

pub mod pragma;
pub mod resolver;
pub mod scope;
pub mod transform;

pub use pragma::{KnownLibrary, JSX_EXTENSIONS, KNOWN_LIBRARIES};
pub use resolver::{ContentScanner, ManifestResolver, PragmaResolver};
pub use transform::{assemble, TransformConfig};

use crate::asset::Asset;
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, trace};

/// A resolved pragma and the strategy that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub library: &'static KnownLibrary,
    pub resolver: &'static str,
}

impl Resolution {
    pub fn pragma(&self) -> &'static str {
        self.library.pragma
    }
}

/// Full outcome for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub resolution: Option<Resolution>,
    pub transform: Option<TransformConfig>,
}

impl Decision {
    fn skipped() -> Self {
        Self {
            resolution: None,
            transform: None,
        }
    }
}

/// Ordered chain of pragma strategies
pub struct JsxResolver {
    resolvers: Vec<Box<dyn PragmaResolver>>,
}

impl Default for JsxResolver {
    fn default() -> Self {
        Self::new(vec![Box::new(ManifestResolver), Box::new(ContentScanner)])
    }
}

impl JsxResolver {
    pub fn new(resolvers: Vec<Box<dyn PragmaResolver>>) -> Self {
        Self { resolvers }
    }

    pub fn resolver_names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Runs the strategies in order and stops at the first hit.
    pub async fn resolve_pragma(&self, asset: &dyn Asset) -> Result<Option<Resolution>> {
        for resolver in &self.resolvers {
            if let Some(library) = resolver.resolve(asset).await? {
                return Ok(Some(Resolution {
                    library,
                    resolver: resolver.name(),
                }));
            }
            trace!(
                "{} resolver found no pragma for {}",
                resolver.name(),
                asset.path().display()
            );
        }
        Ok(None)
    }

    pub async fn decide(&self, asset: &dyn Asset, is_source_module: bool) -> Result<Decision> {
        if !scope::passes(is_source_module) {
            debug!(path = %asset.path().display(), "Skipping JSX detection for vendored asset");
            return Ok(Decision::skipped());
        }

        let resolution = self.resolve_pragma(asset).await?;
        let transform = assemble(resolution.map(|r| r.pragma()), asset.path());

        debug!(
            path = %asset.path().display(),
            pragma = ?resolution.map(|r| r.pragma()),
            resolver = ?resolution.map(|r| r.resolver),
            transform = transform.is_some(),
            "JSX detection complete"
        );

        Ok(Decision {
            resolution,
            transform,
        })
    }

    pub async fn config_for(
        &self,
        asset: &dyn Asset,
        is_source_module: bool,
    ) -> Result<Option<TransformConfig>> {
        Ok(self.decide(asset, is_source_module).await?.transform)
    }
}

/// Transform config for `asset` using the default manifest-then-content
/// chain. `Ok(None)` means the asset gets no JSX transform.
pub async fn resolve_jsx_config(
    asset: &dyn Asset,
    is_source_module: bool,
) -> Result<Option<TransformConfig>> {
    JsxResolver::default()
        .config_for(asset, is_source_module)
        .await
}
