//! Fragmenta - asset compiler
//!
//! Bundles, hashes and compresses the scripts and styles of a site, and
//! renders the tags that reference them.

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compile(args) => commands::compile::run(cli.project, args),
        Commands::Tags(args) => commands::tags::run(cli.project, args),
        Commands::Deploy(args) => commands::deploy::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
