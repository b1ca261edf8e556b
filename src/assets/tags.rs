//! Render-time tag resolution
//!
//! Resolution never fails outward. A group without a compiled bundle falls
//! back to per-file development tags, and a group without sources renders as
//! nothing at all.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use super::discovery::{FileLister, discover_group};
use super::kind::AssetKind;
use super::layout::AssetLayout;
use super::manifest::Manifest;
use super::publish::is_bundle_of;

/// How a single group was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A compiled bundle, referenced by its public href
    Resolved(String),
    /// Development references to every source file of the group
    Fallback(Vec<String>),
}

impl Resolution {
    pub fn hrefs(&self) -> &[String] {
        match self {
            Resolution::Resolved(href) => std::slice::from_ref(href),
            Resolution::Fallback(hrefs) => hrefs,
        }
    }
}

/// Resolves group names to `<link>`/`<script>` fragments
pub struct TagResolver<'a> {
    layout: &'a AssetLayout,
    lister: &'a dyn FileLister,
}

impl<'a> TagResolver<'a> {
    pub fn new(layout: &'a AssetLayout, lister: &'a dyn FileLister) -> Self {
        Self { layout, lister }
    }

    pub fn style_tags(&self, groups: &str, compiled: bool) -> String {
        self.tags(AssetKind::Style, groups, compiled)
    }

    pub fn script_tags(&self, groups: &str, compiled: bool) -> String {
        self.tags(AssetKind::Script, groups, compiled)
    }

    /// Tags for a comma-separated list of groups, in the order given
    pub fn tags(&self, kind: AssetKind, groups: &str, compiled: bool) -> String {
        // The manifest is read once per call, never cached across renders
        let manifest = if compiled {
            Manifest::load(&self.layout.manifest_path())
        } else {
            None
        };

        let mut fragment = String::new();
        for group in groups.split(',').filter(|g| !g.is_empty()) {
            let resolution = self.resolve_with(kind, group, compiled, manifest.as_ref());
            for href in resolution.hrefs() {
                fragment.push_str(&kind.tag(href, group));
            }
        }
        fragment
    }

    /// Resolve one group
    pub fn resolve(&self, kind: AssetKind, group: &str, compiled: bool) -> Resolution {
        let manifest = if compiled {
            Manifest::load(&self.layout.manifest_path())
        } else {
            None
        };
        self.resolve_with(kind, group, compiled, manifest.as_ref())
    }

    fn resolve_with(
        &self,
        kind: AssetKind,
        group: &str,
        compiled: bool,
        manifest: Option<&Manifest>,
    ) -> Resolution {
        if compiled {
            if let Some(path) = self.find_compiled(kind, group, manifest) {
                return Resolution::Resolved(self.layout.public_href(&path));
            }
            warn!(
                "No compiled {} bundle for group '{}', serving source files",
                kind.extension(),
                group
            );
        }
        Resolution::Fallback(self.source_hrefs(kind, group))
    }

    /// Locate the current compiled bundle of a group
    ///
    /// The manifest entry wins when its file is still on disk. Otherwise the
    /// most recently modified `<group>-<hash>.<ext>` is used.
    pub fn find_compiled(
        &self,
        kind: AssetKind,
        group: &str,
        manifest: Option<&Manifest>,
    ) -> Option<PathBuf> {
        if let Some(href) = manifest.and_then(|m| m.lookup(kind, group)) {
            let path = self.layout.output_root().join(href);
            if path.is_file() && is_bundle_of(&path, group, kind) {
                return Some(path);
            }
            debug!("Manifest entry {} for '{}' is gone", href, group);
        }

        // Group names are matched exactly, never as part of the glob
        let dir = self.layout.bundle_dir(kind);
        let pattern = format!("*.{}", kind.extension());
        self.lister
            .list_files(&dir, &pattern)
            .into_iter()
            .filter(|path| is_bundle_of(path, group, kind))
            .map(|path| (modified(&path), path))
            // Newest first; equal times go to the smaller path
            .max_by(|(a_time, a_path), (b_time, b_path)| {
                a_time.cmp(b_time).then_with(|| b_path.cmp(a_path))
            })
            .map(|(_, path)| path)
    }

    fn source_hrefs(&self, kind: AssetKind, group: &str) -> Vec<String> {
        match discover_group(self.layout.source_root(), kind, group, self.lister) {
            Some(found) => found
                .files
                .iter()
                .map(|file| self.layout.source_href(file))
                .collect(),
            None => {
                debug!("No {} sources for group '{}'", kind, group);
                Vec::new()
            }
        }
    }
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
