use super::commands::{LibrariesArgs, ResolveArgs};
use super::output::{OutputFormat, OutputFormatter, ResolveRecord};
use crate::asset::{is_source_module, FsAsset};
use crate::config::JsxPragmaConfig;
use crate::fs::RealFileSystem;
use crate::jsx::JsxResolver;
use crate::package::PackageLoader;

use futures_util::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

pub async fn handle_resolve(args: &ResolveArgs, quiet: bool) -> i32 {
    let config = JsxPragmaConfig::default();
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    debug!("Configuration: {:?}", config);

    let loader = Arc::new(config.package_loader(Arc::new(RealFileSystem::new())));
    let resolver = JsxResolver::default();

    info!("Resolving JSX config for {} file(s)", args.files.len());

    let records = resolve_files(
        &resolver,
        &loader,
        &args.files,
        args.source_override(),
        &config.vendor_dirs,
    )
    .await;

    let failures = records.iter().filter(|r| r.is_error()).count();
    for record in records.iter().filter(|r| r.is_error()) {
        error!(
            "Failed to resolve {}: {}",
            record.path.display(),
            record.error.as_deref().unwrap_or_default()
        );
    }

    let format: OutputFormat = args.format.into();
    let output = match OutputFormatter::new(format).format_records(&records) {
        Ok(out) => out,
        Err(e) => {
            error!("Failed to format output: {}", e);
            return 1;
        }
    };

    if !write_output(&output, args.output.as_deref(), quiet) {
        return 1;
    }

    if failures > 0 {
        1
    } else {
        0
    }
}

pub fn handle_libraries(args: &LibrariesArgs) -> i32 {
    match OutputFormatter::new(args.format.into()).format_libraries() {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            1
        }
    }
}

/// Resolves every file concurrently. Failures are reported per record; one
/// bad file never aborts the others.
///
/// `source_override` forces the source-tree flag; otherwise each file is
/// classified against `vendor_dirs`.
pub async fn resolve_files(
    resolver: &JsxResolver,
    loader: &Arc<PackageLoader>,
    files: &[PathBuf],
    source_override: Option<bool>,
    vendor_dirs: &[String],
) -> Vec<ResolveRecord> {
    join_all(
        files
            .iter()
            .map(|path| resolve_file(resolver, loader, path, source_override, vendor_dirs)),
    )
    .await
}

async fn resolve_file(
    resolver: &JsxResolver,
    loader: &Arc<PackageLoader>,
    path: &Path,
    source_override: Option<bool>,
    vendor_dirs: &[String],
) -> ResolveRecord {
    let canonical = match loader.fs().canonicalize(path) {
        Ok(p) => p,
        Err(e) => {
            let err = anyhow::Error::new(e)
                .context(format!("Failed to resolve path {}", path.display()));
            return ResolveRecord::failed(
                path.to_path_buf(),
                source_override.unwrap_or(true),
                &err,
            );
        }
    };

    let source = source_override.unwrap_or_else(|| is_source_module(&canonical, vendor_dirs));
    debug!(
        "Resolving {} (source module: {})",
        canonical.display(),
        source
    );

    let asset = match FsAsset::load(canonical, Arc::clone(loader)).await {
        Ok(asset) => asset,
        Err(e) => return ResolveRecord::failed(path.to_path_buf(), source, &e),
    };

    match resolver.decide(&asset, source).await {
        Ok(decision) => ResolveRecord {
            path: path.to_path_buf(),
            is_source_module: source,
            resolution: decision.resolution,
            transform: decision.transform,
            error: None,
        },
        Err(e) => ResolveRecord::failed(path.to_path_buf(), source, &e),
    }
}

fn write_output(output: &str, destination: Option<&Path>, quiet: bool) -> bool {
    match destination {
        Some(output_file) => match std::fs::write(output_file, output) {
            Ok(_) => {
                info!("Output written to: {}", output_file.display());
                if !quiet {
                    eprintln!("Output written to: {}", output_file.display());
                }
                true
            }
            Err(e) => {
                error!("Failed to write output to file: {}", e);
                false
            }
        },
        None => {
            println!("{}", output);
            true
        }
    }
}
