use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod build;
mod commands;
mod config;

#[derive(Parser)]
#[command(version, about = "Convert Markdown documentation into styled static HTML pages")]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: DocpressCommand,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,

    /// Overwrite an existing config file
    #[arg(short, long, default_value = "false")]
    force: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long = "config", default_value = "docpress.yaml")]
    config_file: Option<PathBuf>,

    /// Directory containing the markdown files (defaults to the config file's directory)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory (defaults to `site.output` from the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with an error if any listed document was not converted
    #[arg(long, default_value = "false")]
    strict: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long = "config", default_value = "docpress.yaml")]
    config_file: Option<PathBuf>,

    /// Output directory to remove (defaults to `site.output` from the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only print what would be deleted
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum DocpressCommand {
    /// Write a default docpress.yaml
    Init(InitArgs),

    /// Convert the configured documents and write the index page
    Build(BuildArgs),

    /// Delete the generated HTML directory
    Clean(CleanArgs),
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose when set
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match args.command {
        DocpressCommand::Init(args) => {
            commands::init::run(&args)?;
        }
        DocpressCommand::Build(args) => {
            commands::build::run(&args)?;
        }
        DocpressCommand::Clean(args) => {
            commands::clean::run(&args)?;
        }
    }

    Ok(())
}
