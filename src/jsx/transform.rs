//! Transform configuration handed to the Babel stage

use super::pragma::is_jsx_extension;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const BABEL_VERSION: u32 = 7;
pub const JSX_PLUGIN: &str = "@babel/plugin-transform-react-jsx";

/// Built-in Babel config enabling the JSX plugin.
///
/// Serializes as
/// `{"internal":true,"babelVersion":7,"config":{"plugins":[["@babel/plugin-transform-react-jsx",{"pragma":"h"}]]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    pub internal: bool,
    pub babel_version: u32,
    pub config: BabelConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabelConfig {
    pub plugins: Vec<PluginEntry>,
}

/// `[plugin, options]` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry(pub String, pub PluginOptions);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Absent when only the extension qualified the file; Babel then applies
    /// its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pragma: Option<String>,
}

impl TransformConfig {
    pub fn jsx(pragma: Option<&str>) -> Self {
        Self {
            internal: true,
            babel_version: BABEL_VERSION,
            config: BabelConfig {
                plugins: vec![PluginEntry(
                    JSX_PLUGIN.to_string(),
                    PluginOptions {
                        pragma: pragma.map(str::to_string),
                    },
                )],
            },
        }
    }

    /// Pragma carried by the JSX plugin entry
    pub fn pragma(&self) -> Option<&str> {
        self.config
            .plugins
            .iter()
            .find(|PluginEntry(name, _)| name == JSX_PLUGIN)
            .and_then(|PluginEntry(_, options)| options.pragma.as_deref())
    }
}

/// Emits a config when a pragma resolved or the file has a JSX extension.
pub fn assemble(pragma: Option<&str>, path: &Path) -> Option<TransformConfig> {
    if pragma.is_some() || is_jsx_extension(path) {
        Some(TransformConfig::jsx(pragma))
    } else {
        None
    }
}
