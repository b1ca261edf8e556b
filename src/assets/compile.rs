//! The compile pass: discover, bundle, publish, compress
//!
//! Reading sources and writing bundles are fail-fast: the first error ends
//! the pass, so a broken asset shows up at build time rather than as a
//! missing stylesheet in production. Compression failures only affect the
//! group they happened in and are collected in the report.

use tracing::{info, warn};

use super::bundler::bundle;
use super::compress::compress_file;
use super::discovery::{AssetGroup, FileLister, discover_groups};
use super::kind::AssetKind;
use super::layout::AssetLayout;
use super::manifest::Manifest;
use super::minify::{JsMinifier, Minifier, NoopMinifier};
use super::publish::{Bundle, publish};
use crate::config::AssetConfig;
use crate::error::{FragmentaError, Result, compression_failed};
use crate::progress::ProgressReporter;

/// Outcome of a successful compile pass
#[derive(Debug, Default)]
pub struct CompileReport {
    /// Every bundle of this pass, scripts first, then by group name
    pub bundles: Vec<Bundle>,
    /// Groups whose gzip sibling could not be written
    pub compression_failures: Vec<FragmentaError>,
}

impl CompileReport {
    pub fn newly_written(&self) -> usize {
        self.bundles.iter().filter(|b| b.newly_written).count()
    }

    pub fn bundle(&self, kind: AssetKind, group: &str) -> Option<&Bundle> {
        self.bundles
            .iter()
            .find(|b| b.kind == kind && b.group == group)
    }
}

/// Compile every group below the layout's source root
///
/// Scripts go through [`JsMinifier`] unless `config.minify` is off.
pub fn compile(
    layout: &AssetLayout,
    config: &AssetConfig,
    lister: &dyn FileLister,
    progress: &mut dyn ProgressReporter,
) -> Result<CompileReport> {
    let minifier: &dyn Minifier = if config.minify {
        &JsMinifier
    } else {
        &NoopMinifier
    };
    compile_with_minifier(layout, config, lister, minifier, progress)
}

/// Compile with an explicit script minifier; `config.minify` is not consulted
pub fn compile_with_minifier(
    layout: &AssetLayout,
    config: &AssetConfig,
    lister: &dyn FileLister,
    minifier: &dyn Minifier,
    progress: &mut dyn ProgressReporter,
) -> Result<CompileReport> {
    let groups: Vec<AssetGroup> = AssetKind::ALL
        .iter()
        .flat_map(|kind| discover_groups(layout.source_root(), *kind, lister))
        .collect();

    if groups.is_empty() {
        info!("No assets found under {}", layout.source_root().display());
        return Ok(CompileReport::default());
    }

    progress.start(groups.len() as u64);
    let result = compile_groups(layout, config, minifier, &groups, progress);
    match result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abandon(),
    }
    result
}

fn compile_groups(
    layout: &AssetLayout,
    config: &AssetConfig,
    minifier: &dyn Minifier,
    groups: &[AssetGroup],
    progress: &mut dyn ProgressReporter,
) -> Result<CompileReport> {
    let manifest_path = layout.manifest_path();
    let mut manifest = Manifest::load(&manifest_path).unwrap_or_default();
    let mut report = CompileReport::default();

    for group in groups {
        progress.update_group(group.kind, &group.name);

        let content = bundle(group, minifier)?;
        let mut published = publish(layout, content)?;

        if config.compress {
            match compress_file(&published.output_path) {
                Ok(path) => published.compressed_path = Some(path),
                Err(e) => {
                    let err = compression_failed(group.name.clone(), e.to_string());
                    warn!("{}", err);
                    report.compression_failures.push(err);
                }
            }
        }

        manifest.record(
            published.kind,
            &published.group,
            layout.public_href(&published.output_path),
        );
        report.bundles.push(published);
        progress.inc_group();
    }

    manifest.save(&manifest_path)?;

    info!(
        "Compiled {} bundle(s), {} new",
        report.bundles.len(),
        report.newly_written()
    );
    Ok(report)
}
