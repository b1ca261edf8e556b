//! Deploy command implementation
//!
//! Compiles assets first; a failed compile never reaches the deploy script.

use std::path::{Path, PathBuf};
use std::process::Command;

use fragmenta::assets::AssetPipeline;
use fragmenta::error::{Result, deploy_script_failed};
use tracing::{info, warn};

use crate::cli::DeployArgs;
use crate::commands::compile::compile_assets;
use crate::commands::helpers::{asset_config, resolve_project_path};

/// Deploy script, relative to the project root
const DEPLOY_SCRIPT: &str = "bin/deploy";

/// Run deploy command
pub fn run(project: Option<PathBuf>, args: DeployArgs) -> Result<()> {
    let project = resolve_project_path(project)?;
    let config = asset_config(&project, false, false)?;
    let pipeline = AssetPipeline::for_project(&project, config);

    let report = compile_assets(&pipeline)?;
    println!(
        "Compiled {} bundle(s), {} new",
        report.bundles.len(),
        report.newly_written()
    );

    run_deploy_script(&project, &args.mode)
}

fn run_deploy_script(project: &Path, mode: &str) -> Result<()> {
    let script = project.join(DEPLOY_SCRIPT);
    if !script.is_file() {
        warn!("No deploy script at {}, skipping", script.display());
        return Ok(());
    }

    info!("Running {} {}", script.display(), mode);
    let status = Command::new(&script)
        .arg(mode)
        .current_dir(project)
        .status()
        .map_err(|e| deploy_script_failed(script.display().to_string(), e.to_string()))?;

    if !status.success() {
        return Err(deploy_script_failed(
            script.display().to_string(),
            format!("exited with {}", status),
        ));
    }
    Ok(())
}
