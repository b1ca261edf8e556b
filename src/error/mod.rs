//! Error types and handling for Fragmenta
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`assets`]: Asset compilation errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! Not every failure in the asset pipeline is an error. An empty or missing
//! source tree is a normal "no assets" result, and a group without a compiled
//! bundle at render time falls back to development references. Neither has a
//! variant here.

pub mod assets;
pub mod config;
pub mod fs;

#[allow(unused_imports)]
pub use assets::{compression_failed, deploy_script_failed, minify_failed};
#[allow(unused_imports)]
pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
#[allow(unused_imports)]
pub use fs::{
    dir_create_failed, io_error, read_failed as file_read_failed,
    write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Fragmenta operations
#[derive(Error, Diagnostic, Debug)]
pub enum FragmentaError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(
        code(fragmenta::fs::read_failed),
        help("Asset sources must be readable; the compile pass stops rather than ship a partial bundle")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(fragmenta::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(fragmenta::fs::dir_create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fragmenta::fs::io_error))]
    IoError { message: String },

    // Asset errors
    #[error("Failed to minify {path}: {reason}")]
    #[diagnostic(code(fragmenta::assets::minify_failed))]
    MinifyFailed { path: String, reason: String },

    #[error("Failed to compress bundle for group '{group}': {reason}")]
    #[diagnostic(
        code(fragmenta::assets::compression_failed),
        help("The uncompressed bundle was published; re-run 'fragmenta compile' to retry compression")
    )]
    CompressionFailed { group: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(fragmenta::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(fragmenta::config::parse_failed),
        help("Expected a YAML mapping such as:\n  assets:\n    compress: true\n    minify: true")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Deploy errors
    #[error("Deploy script {path} failed: {reason}")]
    #[diagnostic(code(fragmenta::deploy::script_failed))]
    DeployScriptFailed { path: String, reason: String },
}

impl From<std::io::Error> for FragmentaError {
    fn from(err: std::io::Error) -> Self {
        FragmentaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FragmentaError {
    fn from(err: serde_yaml::Error) -> Self {
        FragmentaError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FragmentaError>;
