//! Where asset sources live and where compiled bundles go
//!
//! ```text
//! <project>/app/assets/scripts/<group>/*.js
//! <project>/app/assets/styles/<group>/*.css
//! <project>/public/assets/scripts/<group>-<hash>.js(.gz)
//! <project>/public/assets/styles/<group>-<hash>.css(.gz)
//! <project>/public/assets/manifest.json
//! ```

use std::path::{Path, PathBuf};

use super::kind::AssetKind;
use crate::path_utils::relative_href;

/// Directory names used under the output root
const ASSETS_DIR: &str = "assets";
const MANIFEST_FILE: &str = "manifest.json";

/// Source and output roots of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    project_root: PathBuf,
    source_root: PathBuf,
    output_root: PathBuf,
}

impl AssetLayout {
    /// Conventional layout for a project rooted at `project_root`
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            source_root: project_root.join("app").join(ASSETS_DIR),
            output_root: project_root.join("public"),
            project_root,
        }
    }

    /// Layout with explicit roots
    ///
    /// Development references are still made relative to `project_root`.
    pub fn new(
        project_root: impl Into<PathBuf>,
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            source_root: source_root.into(),
            output_root: output_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Root holding `scripts/` and `styles/` source groups
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Publicly served root; hrefs of compiled bundles are relative to it
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Directory compiled bundles of `kind` are published into
    pub fn bundle_dir(&self, kind: AssetKind) -> PathBuf {
        self.output_root.join(ASSETS_DIR).join(kind.dir_name())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_root.join(ASSETS_DIR).join(MANIFEST_FILE)
    }

    /// Reference for a source file served directly in development
    pub fn source_href(&self, source_file: &Path) -> String {
        relative_href(&self.project_root, source_file)
    }

    /// Reference for a published bundle
    pub fn public_href(&self, bundle_file: &Path) -> String {
        relative_href(&self.output_root, bundle_file)
    }
}
