//! Pragma resolution strategies
//!
//! Each strategy maps an asset to at most one [`KnownLibrary`]. Strategies are
//! tried in order by [`super::JsxResolver`]; the first hit wins.

use super::pragma::{KnownLibrary, KNOWN_LIBRARIES};
use crate::asset::Asset;
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

#[async_trait]
pub trait PragmaResolver: Send + Sync {
    /// Short identifier reported alongside a resolution
    fn name(&self) -> &'static str;

    async fn resolve(&self, asset: &dyn Asset) -> Result<Option<&'static KnownLibrary>>;
}

/// Matches known libraries against the owning package's `dependencies` and
/// `devDependencies`.
pub struct ManifestResolver;

#[async_trait]
impl PragmaResolver for ManifestResolver {
    fn name(&self) -> &'static str {
        "manifest"
    }

    async fn resolve(&self, asset: &dyn Asset) -> Result<Option<&'static KnownLibrary>> {
        let Some(manifest) = asset.package().await? else {
            trace!("No package manifest for {}", asset.path().display());
            return Ok(None);
        };

        Ok(KNOWN_LIBRARIES
            .iter()
            .find(|lib| manifest.has_dependency(lib.name)))
    }
}

/// Textual fallback: looks for `from "<lib>"` or `require("<lib>")` in the
/// file contents.
///
/// This is a plain regex scan. Matches inside comments or string literals
/// count, and nothing anchors the pattern to a word boundary.
pub struct ContentScanner;

impl ContentScanner {
    /// Synchronous scan over raw contents
    pub fn scan(contents: &str) -> Option<&'static KnownLibrary> {
        patterns()
            .iter()
            .find(|(_, pattern)| pattern.is_match(contents))
            .map(|(lib, _)| *lib)
    }
}

#[async_trait]
impl PragmaResolver for ContentScanner {
    fn name(&self) -> &'static str {
        "content"
    }

    async fn resolve(&self, asset: &dyn Asset) -> Result<Option<&'static KnownLibrary>> {
        Ok(Self::scan(asset.contents()))
    }
}

/// Import/require pattern for one library.
///
/// Any of the three JS quote characters is accepted on either side of the
/// name. `from` must be followed by at least one whitespace character.
pub fn import_pattern(library: &str) -> String {
    let name = regex::escape(library);
    format!(r#"from\s+[`"']{name}[`"']|require\([`"']{name}[`"']\)"#)
}

fn patterns() -> &'static [(&'static KnownLibrary, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static KnownLibrary, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        KNOWN_LIBRARIES
            .iter()
            .map(|lib| {
                let pattern =
                    Regex::new(&import_pattern(lib.name)).expect("Invalid import pattern regex");
                (lib, pattern)
            })
            .collect()
    })
}
