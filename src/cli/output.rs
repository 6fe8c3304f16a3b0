//! Output formatting for resolve results and the library table
//!
//! JSON and YAML mirror the serialized [`ResolveRecord`]; the human format is
//! a compact per-file summary.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::jsx::transform::JSX_PLUGIN;
use crate::jsx::{KnownLibrary, Resolution, TransformConfig, JSX_EXTENSIONS, KNOWN_LIBRARIES};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Outcome for one file passed to `jsxpragma resolve`
#[derive(Debug, Clone, Serialize)]
pub struct ResolveRecord {
    pub path: PathBuf,
    pub is_source_module: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    pub transform: Option<TransformConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolveRecord {
    pub fn failed(path: PathBuf, is_source_module: bool, error: &anyhow::Error) -> Self {
        Self {
            path,
            is_source_module,
            resolution: None,
            transform: None,
            error: Some(format!("{:#}", error)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Serialize)]
struct LibraryTable {
    libraries: &'static [KnownLibrary],
    jsx_extensions: &'static [&'static str],
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_records(&self, records: &[ResolveRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(records)
                .context("Failed to serialize resolve results to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(records)
                .context("Failed to serialize resolve results to YAML"),
            OutputFormat::Human => Ok(self.format_records_human(records)),
        }
    }

    pub fn format_libraries(&self) -> Result<String> {
        let table = LibraryTable {
            libraries: KNOWN_LIBRARIES,
            jsx_extensions: JSX_EXTENSIONS,
        };

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&table)
                .context("Failed to serialize library table to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&table).context("Failed to serialize library table to YAML")
            }
            OutputFormat::Human => Ok(self.format_libraries_human()),
        }
    }

    fn format_records_human(&self, records: &[ResolveRecord]) -> String {
        let mut output = String::new();

        for record in records {
            let path = record.path.display();

            if let Some(ref error) = record.error {
                output.push_str(&format!("\u{2717} {}\n", path));
                output.push_str(&format!("  Error:      {}\n", error));
                continue;
            }

            match &record.transform {
                Some(config) => {
                    output.push_str(&format!("\u{2713} {}\n", path));
                    match (config.pragma(), &record.resolution) {
                        (Some(pragma), Some(resolution)) => output.push_str(&format!(
                            "  Pragma:     {} (from {} via {})\n",
                            pragma, resolution.library.name, resolution.resolver
                        )),
                        (Some(pragma), None) => {
                            output.push_str(&format!("  Pragma:     {}\n", pragma))
                        }
                        (None, _) => output.push_str("  Pragma:     (Babel default)\n"),
                    }
                    output.push_str(&format!(
                        "  Plugin:     {} (Babel {})\n",
                        JSX_PLUGIN, config.babel_version
                    ));
                }
                None => {
                    let reason = if record.is_source_module {
                        "no known JSX library and not a JSX extension"
                    } else {
                        "vendored"
                    };
                    output.push_str(&format!("- {}\n", path));
                    output.push_str(&format!("  Skipped:    {}\n", reason));
                }
            }
        }

        output
    }

    fn format_libraries_human(&self) -> String {
        let mut output = String::from("Known JSX libraries (precedence order):\n");

        for (index, library) in KNOWN_LIBRARIES.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {:<10} {}\n",
                index + 1,
                library.name,
                library.pragma
            ));
        }

        let extensions: Vec<String> = JSX_EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect();
        output.push_str(&format!("\nJSX extensions: {}\n", extensions.join(", ")));
        output
    }
}
