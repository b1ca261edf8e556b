//! Command helper utilities

use std::path::{Path, PathBuf};

use fragmenta::config::{AssetConfig, load_project_config};
use fragmenta::error::{Result, io_error};

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {}", e))),
    }
}

/// Asset settings from `fragmenta.yaml`, with command-line overrides applied
pub fn asset_config(project: &Path, no_compress: bool, no_minify: bool) -> Result<AssetConfig> {
    let mut config = load_project_config(project)?.assets;
    if no_compress {
        config.compress = false;
    }
    if no_minify {
        config.minify = false;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_project_path_is_kept() {
        let path = resolve_project_path(Some(PathBuf::from("/srv/site"))).unwrap();
        assert_eq!(path, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_missing_project_path_uses_current_dir() {
        let path = resolve_project_path(None).unwrap();
        assert_eq!(path, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("fragmenta.yaml"),
            "assets:\n  compress: true\n  minify: false\n",
        )
        .unwrap();

        let config = asset_config(temp.path(), false, false).unwrap();
        assert!(config.compress);
        assert!(!config.minify);

        let config = asset_config(temp.path(), true, false).unwrap();
        assert!(!config.compress);
        assert!(!config.minify);
    }
}
