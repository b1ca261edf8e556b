//! Asset group discovery
//!
//! A group is every file of one kind sitting directly inside a named
//! directory below the kind's source root:
//!
//! ```text
//! app/assets/styles/global/a.css   -> group "global"
//! app/assets/styles/global/b.css   -> group "global"
//! app/assets/styles/admin/x.css    -> group "admin"
//! app/assets/styles/loose.css      -> no group
//! ```
//!
//! Discovery never fails. A missing or unreadable tree is simply a tree
//! without assets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::kind::AssetKind;
use crate::path_utils::to_forward_slashes;

/// A named set of same-kind source files sharing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetGroup {
    /// Base name of the containing directory
    pub name: String,
    pub kind: AssetKind,
    /// Source files, sorted by path
    pub files: Vec<PathBuf>,
}

/// Directory listing capability used by discovery and resolution
pub trait FileLister: Send + Sync {
    /// List regular files under `dir` whose `dir`-relative path matches the
    /// glob `pattern`. `*` never crosses a `/`. Results are sorted by path.
    fn list_files(&self, dir: &Path, pattern: &str) -> Vec<PathBuf>;
}

/// [`FileLister`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FileLister for FsLister {
    fn list_files(&self, dir: &Path, pattern: &str) -> Vec<PathBuf> {
        if !dir.is_dir() {
            debug!("No directory at {}, nothing to list", dir.display());
            return Vec::new();
        }

        let glob = match Glob::new(pattern) {
            Ok(glob) => glob,
            Err(e) => {
                debug!("Ignoring invalid pattern {:?}: {}", pattern, e);
                return Vec::new();
            }
        };

        // Patterns here are fixed-depth, so the walk never needs to go deeper
        let depth = pattern.split('/').count();

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(depth)
            .max_depth(depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(dir).ok()?.to_path_buf();
                let normalized = to_forward_slashes(&relative);
                if normalized.split('/').any(|part| part.starts_with('.')) {
                    return None;
                }
                glob.matched(&CandidatePath::from(normalized.as_str()))
                    .is_some()
                    .then(|| e.into_path())
            })
            .collect();

        files.sort();
        files
    }
}

/// Source directory holding every group of `kind`
pub fn kind_root(source_root: &Path, kind: AssetKind) -> PathBuf {
    source_root.join(kind.dir_name())
}

/// Discover all groups of `kind` below `source_root`, sorted by name
pub fn discover_groups(
    source_root: &Path,
    kind: AssetKind,
    lister: &dyn FileLister,
) -> Vec<AssetGroup> {
    let root = kind_root(source_root, kind);
    let pattern = format!("*/*.{}", kind.extension());

    let mut grouped: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for file in lister.list_files(&root, &pattern) {
        let Some(name) = file
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            continue;
        };
        grouped.entry(name.to_string()).or_default().push(file);
    }

    grouped
        .into_iter()
        .map(|(name, mut files)| {
            files.sort();
            AssetGroup { name, kind, files }
        })
        .collect()
}

/// Discover a single group by exact directory name
pub fn discover_group(
    source_root: &Path,
    kind: AssetKind,
    name: &str,
    lister: &dyn FileLister,
) -> Option<AssetGroup> {
    discover_groups(source_root, kind, lister)
        .into_iter()
        .find(|group| group.name == name)
}
