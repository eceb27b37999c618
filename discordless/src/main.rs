//! # discordless
//!
//! Builds the discordless alternatives page as one self-contained HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Render the bundled data to dist/index.html
//! discordless build
//!
//! # Render a custom data file somewhere else
//! discordless build --data alternatives.json --out public/index.html
//!
//! # Show how records are grouped
//! discordless list --json
//! ```

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use config::DiscordlessConfig;

#[derive(Parser, Debug)]
#[command(name = "discordless")]
#[command(about = "Builds the discordless alternatives page as static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Config file (default: ./discordless.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write it to disk
    Build(BuildArgs),
    /// Print the popular and less popular groups
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
struct BuildArgs {
    /// Alternatives data file (JSON); bundled data when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output HTML file (default: dist/index.html)
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Alternatives data file (JSON); bundled data when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<DiscordlessConfig> {
    match explicit {
        Some(path) => DiscordlessConfig::load_strict(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            Ok(DiscordlessConfig::load(&cwd))
        }
    }
}

fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("discordless v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_ref())?;

    match args.command {
        Command::Build(build) => {
            let data = build.data.or_else(|| config.build.data.clone());
            let out = build
                .out
                .or_else(|| config.build.out.clone())
                .unwrap_or_else(|| PathBuf::from(commands::DEFAULT_OUT));
            commands::build(data.as_deref(), &out, &config.page_options())
        }
        Command::List(list) => {
            let data = list.data.or_else(|| config.build.data.clone());
            let output = commands::list(data.as_deref(), list.json)?;
            println!("{output}");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[discordless] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
