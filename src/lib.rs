//! Fragmenta asset pipeline
//!
//! Compiles per-directory groups of scripts and styles into content-addressed,
//! gzip-compressed bundles, and resolves group names into HTML reference tags
//! for either the compiled bundles or the individual development sources.

/// Asset discovery, bundling, publishing and tag resolution
pub mod assets;

/// Shared filesystem helpers
pub mod common;

/// Project configuration (`fragmenta.yaml`)
pub mod config;

/// Error types and constructors
pub mod error;

/// Content hashing
pub mod hash;

/// Path rendering helpers
pub mod path_utils;

/// Compile progress reporting
pub mod progress;

pub use assets::{AssetKind, AssetLayout, AssetPipeline, CompileReport, TagResolver};
pub use config::{AssetConfig, ProjectConfig, load_project_config};
pub use error::{FragmentaError, Result};
