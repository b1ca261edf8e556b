//! Group bundling
//!
//! A bundle is every file of a group, in path order, each preceded by a
//! newline. Script files go through the minifier first. A file the minifier
//! rejects is bundled as-is; a file that cannot be read stops the bundle.

use std::fs;

use tracing::{debug, warn};

use super::discovery::AssetGroup;
use super::kind::AssetKind;
use super::minify::Minifier;
use crate::error::{Result, file_read_failed, minify_failed};

/// Concatenated content for one group, ready to be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleContent {
    pub group: String,
    pub kind: AssetKind,
    pub content: Vec<u8>,
}

/// Concatenate a group's files into a single buffer
pub fn bundle(group: &AssetGroup, minifier: &dyn Minifier) -> Result<BundleContent> {
    let mut files = group.files.clone();
    files.sort();

    let mut content = Vec::new();
    for file in &files {
        let raw = fs::read(file)
            .map_err(|e| file_read_failed(file.display().to_string(), e.to_string()))?;

        let body = match group.kind {
            AssetKind::Style => raw,
            AssetKind::Script => match minifier.minify(&raw) {
                Ok(minified) => minified,
                Err(e) => {
                    warn!(
                        "{}, bundling unminified source",
                        minify_failed(file.display().to_string(), e.to_string())
                    );
                    raw
                }
            },
        };

        debug!("Bundled {} ({} bytes)", file.display(), body.len());
        content.push(b'\n');
        content.extend_from_slice(&body);
    }

    Ok(BundleContent {
        group: group.name.clone(),
        kind: group.kind,
        content,
    })
}
