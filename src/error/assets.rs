//! Asset pipeline and deploy errors

use super::FragmentaError;

/// Creates a minification failed error
pub fn minify_failed(path: impl Into<String>, reason: impl Into<String>) -> FragmentaError {
    FragmentaError::MinifyFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a compression failed error
pub fn compression_failed(group: impl Into<String>, reason: impl Into<String>) -> FragmentaError {
    FragmentaError::CompressionFailed {
        group: group.into(),
        reason: reason.into(),
    }
}

/// Creates a deploy script failed error
pub fn deploy_script_failed(path: impl Into<String>, reason: impl Into<String>) -> FragmentaError {
    FragmentaError::DeployScriptFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
