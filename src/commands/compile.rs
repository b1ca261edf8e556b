//! Compile command implementation

use std::path::PathBuf;

use console::Style;
use fragmenta::assets::AssetPipeline;
use fragmenta::assets::CompileReport;
use fragmenta::error::Result;
use fragmenta::progress::InteractiveProgressReporter;

use crate::cli::CompileArgs;
use crate::commands::helpers::{asset_config, resolve_project_path};

/// Run compile command
pub fn run(project: Option<PathBuf>, args: CompileArgs) -> Result<()> {
    let project = resolve_project_path(project)?;
    let config = asset_config(&project, args.no_compress, args.no_minify)?;
    let pipeline = AssetPipeline::for_project(&project, config);

    let report = compile_assets(&pipeline)?;
    print_report(&pipeline, &report);
    Ok(())
}

/// Compile with a progress bar on stderr
pub(crate) fn compile_assets(pipeline: &AssetPipeline) -> Result<CompileReport> {
    let mut progress = InteractiveProgressReporter::new();
    pipeline.compile_with_progress(&mut progress)
}

fn print_report(pipeline: &AssetPipeline, report: &CompileReport) {
    if report.bundles.is_empty() {
        println!("No assets to compile");
        return;
    }

    let bold = Style::new().bold();
    for bundle in &report.bundles {
        let status = if bundle.newly_written {
            Style::new().green().apply_to("compiled")
        } else {
            Style::new().dim().apply_to("unchanged")
        };
        println!(
            "{:>9} {} -> {}",
            status,
            bold.apply_to(format!("{}/{}", bundle.kind, bundle.group)),
            pipeline.layout().public_href(&bundle.output_path)
        );
    }

    for failure in &report.compression_failures {
        println!("{} {}", Style::new().yellow().apply_to("warning:"), failure);
    }

    println!(
        "{} bundle(s), {} new",
        report.bundles.len(),
        report.newly_written()
    );
}
