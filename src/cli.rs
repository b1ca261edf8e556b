//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use fragmenta::AssetKind;
use std::path::PathBuf;

/// Fragmenta - asset compiler
///
/// Bundle, hash and compress the scripts and styles of a site.
#[derive(Parser, Debug)]
#[command(
    name = "fragmenta",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Asset compiler for script and style bundles",
    long_about = "Fragmenta bundles each directory of scripts and styles into a single \
                  content-addressed file with a gzip sibling, and renders the tags that \
                  reference either the bundles or the individual sources.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  fragmenta compile\n    \
                  fragmenta tags styles global,admin --compiled\n    \
                  fragmenta deploy production"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "FRAGMENTA_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile all asset groups into hashed bundles
    Compile(CompileArgs),

    /// Print reference tags for asset groups
    Tags(TagsArgs),

    /// Compile assets, then run the project's deploy script
    Deploy(DeployArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the compile command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Compile with settings from fragmenta.yaml:\n    fragmenta compile\n\n\
                  Skip gzip siblings:\n    fragmenta compile --no-compress\n\n\
                  Bundle scripts without minifying:\n    fragmenta compile --no-minify")]
pub struct CompileArgs {
    /// Do not write gzip siblings
    #[arg(long)]
    pub no_compress: bool,

    /// Do not minify scripts
    #[arg(long)]
    pub no_minify: bool,
}

/// Arguments for the tags command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Development tags for two style groups:\n    fragmenta tags styles global,admin\n\n\
                  Tags for the compiled script bundle:\n    fragmenta tags scripts app --compiled")]
pub struct TagsArgs {
    /// Asset kind (scripts or styles)
    #[arg(value_parser = parse_kind)]
    pub kind: AssetKind,

    /// Comma-separated group names
    pub groups: String,

    /// Reference compiled bundles instead of source files
    #[arg(long)]
    pub compiled: bool,
}

/// Arguments for the deploy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Deploy in development mode:\n    fragmenta deploy\n\n\
                  Deploy to production:\n    fragmenta deploy production")]
pub struct DeployArgs {
    /// Mode passed to bin/deploy
    #[arg(default_value = "development")]
    pub mode: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fragmenta completions --shell bash > ~/.bash_completion.d/fragmenta\n\n\
                  Generate zsh completions:\n    fragmenta completions --shell zsh > ~/.zfunc/_fragmenta")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_parser = parse_shell)]
    pub shell: Shell,
}

fn parse_shell(value: &str) -> Result<Shell, String> {
    match value.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(format!(
            "unknown shell '{value}' (expected bash, elvish, fish, powershell or zsh)"
        )),
    }
}

fn parse_kind(value: &str) -> Result<AssetKind, String> {
    AssetKind::parse(value)
        .ok_or_else(|| format!("unknown asset kind '{value}' (expected scripts or styles)"))
}
