//! Content-addressed publishing of bundles
//!
//! A bundle is written to `<group>-<hash>.<ext>` where `hash` is the BLAKE3
//! digest of its content. Different content always lands at a different
//! path, and a path that already exists already holds exactly that content,
//! so nothing is ever rewritten or removed here.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::bundler::BundleContent;
use super::kind::AssetKind;
use super::layout::AssetLayout;
use crate::common::fs::{ensure_dir, write_bytes_atomic};
use crate::error::Result;
use crate::hash::hash_bytes;

/// A bundle published under its content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub group: String,
    pub kind: AssetKind,
    pub content: Vec<u8>,
    pub content_hash: String,
    pub output_path: PathBuf,
    /// Set once the gzip sibling has been written
    pub compressed_path: Option<PathBuf>,
    /// False when an identical bundle was already on disk
    pub newly_written: bool,
}

/// File name of a bundle: `<group>-<hash>.<ext>`
pub fn bundle_file_name(group: &str, kind: AssetKind, content_hash: &str) -> String {
    format!("{}-{}.{}", group, content_hash, kind.extension())
}

/// Full output path of a bundle
pub fn bundle_path(layout: &AssetLayout, group: &str, kind: AssetKind, content_hash: &str) -> PathBuf {
    layout
        .bundle_dir(kind)
        .join(bundle_file_name(group, kind, content_hash))
}

/// Extract the hash from a bundle file name for `group`, if it is one
pub fn parse_bundle_file_name<'a>(file_name: &'a str, group: &str, kind: AssetKind) -> Option<&'a str> {
    let hash = file_name
        .strip_prefix(group)?
        .strip_prefix('-')?
        .strip_suffix(kind.extension())?
        .strip_suffix('.')?;
    crate::hash::is_hex_digest(hash).then_some(hash)
}

/// Hash a bundle and write it to its content-addressed path
///
/// Creating the directory or writing the file are both fatal.
pub fn publish(layout: &AssetLayout, content: BundleContent) -> Result<Bundle> {
    let content_hash = hash_bytes(&content.content);
    let dir = layout.bundle_dir(content.kind);
    ensure_dir(&dir)?;

    let output_path = bundle_path(layout, &content.group, content.kind, &content_hash);
    let newly_written = if output_path.is_file() {
        debug!(
            "Bundle {} already published, leaving it in place",
            output_path.display()
        );
        false
    } else {
        write_bytes_atomic(&output_path, &content.content)?;
        info!(
            "Published {} ({} bytes)",
            layout.public_href(&output_path),
            content.content.len()
        );
        true
    };

    Ok(Bundle {
        compressed_path: None,
        group: content.group,
        kind: content.kind,
        content: content.content,
        content_hash,
        output_path,
        newly_written,
    })
}

/// Whether `path` is a published bundle of `group`
pub fn is_bundle_of(path: &Path, group: &str, kind: AssetKind) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|name| parse_bundle_file_name(name, group, kind))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn content(group: &str, kind: AssetKind, body: &[u8]) -> BundleContent {
        BundleContent {
            group: group.to_string(),
            kind,
            content: body.to_vec(),
        }
    }

    #[test]
    fn test_publish_writes_hash_named_file() {
        let temp = TempDir::new().unwrap();
        let layout = AssetLayout::for_project(temp.path());

        let bundle = publish(&layout, content("global", AssetKind::Style, b"\nA\nB")).unwrap();

        let expected_hash = hash_bytes(b"\nA\nB");
        assert_eq!(bundle.content_hash, expected_hash);
        assert_eq!(
            bundle.output_path,
            temp.path()
                .join("public/assets/styles")
                .join(format!("global-{expected_hash}.css"))
        );
        assert_eq!(fs::read(&bundle.output_path).unwrap(), b"\nA\nB");
        assert!(bundle.newly_written);
        assert!(bundle.compressed_path.is_none());
    }

    #[test]
    fn test_publish_is_write_once_per_hash() {
        let temp = TempDir::new().unwrap();
        let layout = AssetLayout::for_project(temp.path());

        let first = publish(&layout, content("app", AssetKind::Script, b"\na()")).unwrap();
        let second = publish(&layout, content("app", AssetKind::Script, b"\na()")).unwrap();

        assert_eq!(first.output_path, second.output_path);
        assert!(first.newly_written);
        assert!(!second.newly_written);
    }

    #[test]
    fn test_different_content_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let layout = AssetLayout::for_project(temp.path());

        let old = publish(&layout, content("app", AssetKind::Script, b"\nold()")).unwrap();
        let new = publish(&layout, content("app", AssetKind::Script, b"\nnew()")).unwrap();

        assert_ne!(old.output_path, new.output_path);
        assert_eq!(fs::read(&old.output_path).unwrap(), b"\nold()");
        assert_eq!(fs::read(&new.output_path).unwrap(), b"\nnew()");
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_output_is_fatal() {
        use crate::error::FragmentaError;

        let temp = TempDir::new().unwrap();
        // A file where the output directory should be
        fs::write(temp.path().join("public"), "not a directory").unwrap();
        let layout = AssetLayout::for_project(temp.path());

        let result = publish(&layout, content("global", AssetKind::Style, b"x"));
        assert!(matches!(
            result,
            Err(FragmentaError::DirectoryCreateFailed { .. })
        ));
    }

    #[test]
    fn test_parse_bundle_file_name() {
        assert_eq!(
            parse_bundle_file_name("global-abc123.css", "global", AssetKind::Style),
            Some("abc123")
        );
        assert_eq!(
            parse_bundle_file_name("global-abc123.css.gz", "global", AssetKind::Style),
            None
        );
        assert_eq!(
            parse_bundle_file_name("global-extra-abc123.css", "global", AssetKind::Style),
            None
        );
        assert_eq!(
            parse_bundle_file_name("global-abc123.js", "global", AssetKind::Style),
            None
        );
        assert_eq!(
            parse_bundle_file_name("globalabc123.css", "global", AssetKind::Style),
            None
        );
    }

    #[test]
    fn test_is_bundle_of() {
        assert!(is_bundle_of(
            Path::new("/x/public/assets/scripts/app-0f.js"),
            "app",
            AssetKind::Script
        ));
        assert!(!is_bundle_of(
            Path::new("/x/public/assets/scripts/app-0f.js.gz"),
            "app",
            AssetKind::Script
        ));
    }
}
