//! Project configuration
//!
//! Settings live in an optional `fragmenta.yaml` at the project root:
//!
//! ```yaml
//! assets:
//!   compress: true
//!   minify: true
//! ```
//!
//! A missing file is not an error; every setting has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FragmentaError, Result, config_parse_failed, config_read_failed};

/// Project config filename
pub const PROJECT_CONFIG_FILE: &str = "fragmenta.yaml";

/// Settings for the asset compile pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Write a gzip sibling next to every published bundle
    pub compress: bool,
    /// Minify script bundles
    pub minify: bool,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            compress: true,
            minify: true,
        }
    }
}

/// Top-level shape of `fragmenta.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub assets: AssetConfig,
}

impl ProjectConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Load project configuration from a directory
///
/// Returns defaults if `fragmenta.yaml` does not exist.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(PROJECT_CONFIG_FILE);

    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;

    ProjectConfig::from_yaml(&content).map_err(|e| match e {
        FragmentaError::ConfigParseFailed { reason, .. } => {
            config_parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}
