//! Record of the most recently compiled bundle per group
//!
//! Old bundles stay on disk after a recompile, so a directory listing alone
//! cannot tell which one is current. Every compile pass records its bundles
//! here and resolution consults this first.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::kind::AssetKind;
use crate::common::fs::write_bytes_atomic;
use crate::error::{Result, file_write_failed};

/// Group name -> public href of its current bundle, per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

impl Manifest {
    /// Load a manifest, treating a missing or unreadable one as absent
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read(path).ok()?;
        match serde_json::from_slice(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!("Ignoring corrupt asset manifest {}: {}", path.display(), e);
                None
            }
        }
    }

    fn entries(&self, kind: AssetKind) -> &BTreeMap<String, String> {
        match kind {
            AssetKind::Script => &self.scripts,
            AssetKind::Style => &self.styles,
        }
    }

    fn entries_mut(&mut self, kind: AssetKind) -> &mut BTreeMap<String, String> {
        match kind {
            AssetKind::Script => &mut self.scripts,
            AssetKind::Style => &mut self.styles,
        }
    }

    pub fn lookup(&self, kind: AssetKind, group: &str) -> Option<&str> {
        self.entries(kind).get(group).map(String::as_str)
    }

    pub fn record(&mut self, kind: AssetKind, group: &str, href: String) {
        self.entries_mut(kind).insert(group.to_string(), href);
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }

    /// Write the manifest atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_vec_pretty(self)
            .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))?;
        json.push(b'\n');
        write_bytes_atomic(path, &json)
    }
}
