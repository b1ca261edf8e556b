//! Tags command implementation

use std::path::PathBuf;

use fragmenta::assets::AssetPipeline;
use fragmenta::config::AssetConfig;
use fragmenta::error::Result;

use crate::cli::TagsArgs;
use crate::commands::helpers::resolve_project_path;

/// Print the tag fragment for the requested groups
pub fn run(project: Option<PathBuf>, args: TagsArgs) -> Result<()> {
    let project = resolve_project_path(project)?;
    // Resolution does not depend on compile settings
    let pipeline = AssetPipeline::for_project(project, AssetConfig::default());

    let fragment = pipeline
        .resolver()
        .tags(args.kind, &args.groups, args.compiled);
    print!("{}", fragment);
    Ok(())
}
