//! Asset compilation pipeline
//!
//! Script and style sources are grouped per directory, bundled, published
//! under their content hash and gzip-compressed. At render time
//! [`TagResolver`] turns group names back into `<script>`/`<link>` tags,
//! pointing either at the compiled bundle or at the individual sources.

pub mod bundler;
pub mod compile;
pub mod compress;
pub mod discovery;
pub mod kind;
pub mod layout;
pub mod manifest;
pub mod minify;
pub mod publish;
pub mod tags;

use std::path::PathBuf;

pub use bundler::{BundleContent, bundle};
pub use compile::{CompileReport, compile, compile_with_minifier};
pub use discovery::{AssetGroup, FileLister, FsLister, discover_groups};
pub use kind::AssetKind;
pub use layout::AssetLayout;
pub use manifest::Manifest;
pub use minify::{JsMinifier, Minifier, MinifyError, NoopMinifier};
pub use publish::{Bundle, publish};
pub use tags::{Resolution, TagResolver};

use crate::config::AssetConfig;
use crate::error::Result;
use crate::progress::{ProgressReporter, SilentProgressReporter};

/// Compile and resolve assets for one project
pub struct AssetPipeline {
    layout: AssetLayout,
    config: AssetConfig,
    lister: Box<dyn FileLister>,
    minifier: Option<Box<dyn Minifier>>,
}

impl AssetPipeline {
    pub fn new(layout: AssetLayout, config: AssetConfig) -> Self {
        Self {
            layout,
            config,
            lister: Box::new(FsLister),
            minifier: None,
        }
    }

    /// Pipeline over the conventional layout of `project_root`
    pub fn for_project(project_root: impl Into<PathBuf>, config: AssetConfig) -> Self {
        Self::new(AssetLayout::for_project(project_root), config)
    }

    /// Replace the directory lister
    pub fn with_lister(mut self, lister: Box<dyn FileLister>) -> Self {
        self.lister = lister;
        self
    }

    /// Replace the script minifier used when minification is enabled
    pub fn with_minifier(mut self, minifier: Box<dyn Minifier>) -> Self {
        self.minifier = Some(minifier);
        self
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    pub fn compile(&self) -> Result<CompileReport> {
        self.compile_with_progress(&mut SilentProgressReporter)
    }

    pub fn compile_with_progress(
        &self,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CompileReport> {
        match &self.minifier {
            Some(minifier) if self.config.minify => compile_with_minifier(
                &self.layout,
                &self.config,
                self.lister.as_ref(),
                minifier.as_ref(),
                progress,
            ),
            _ => compile(&self.layout, &self.config, self.lister.as_ref(), progress),
        }
    }

    pub fn resolver(&self) -> TagResolver<'_> {
        TagResolver::new(&self.layout, self.lister.as_ref())
    }

    pub fn style_tags(&self, groups: &str, compiled: bool) -> String {
        self.resolver().style_tags(groups, compiled)
    }

    pub fn script_tags(&self, groups: &str, compiled: bool) -> String {
        self.resolver().script_tags(groups, compiled)
    }
}
