//! Portico CLI - build a personal profile webpage from the terminal.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::ConfigFile;

#[derive(Parser)]
#[command(name = "portico")]
#[command(about = "Profile webpage generator with auto-save and live preview")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to portico.toml config file
    #[arg(short, long, default_value = "portico.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create portico.toml and an empty saved profile
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Change profile fields and auto-save
    Set(commands::set::SetArgs),

    /// Print the saved profile as JSON
    Show,

    /// Export the profile as a standalone HTML page
    Export {
        /// Output directory (defaults to config or ".")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the page instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Minify the embedded stylesheet
        #[arg(long, conflicts_with = "no_minify")]
        minify: bool,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,

        /// Open the exported page in a browser
        #[arg(long)]
        open: bool,
    },

    /// Print the live preview fragment of the saved profile
    Preview {
        /// Print fragment and container style as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keep a preview page in sync with the saved profile
    Watch {
        /// Preview page to write (defaults to config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print live updates as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Delete the saved profile
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigFile::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, &config, yes).await?;
        }
        Commands::Set(args) => {
            commands::set::run(&config, args).await?;
        }
        Commands::Show => {
            commands::show::run(&config).await?;
        }
        Commands::Export {
            output,
            stdout,
            minify,
            no_minify,
            open,
        } => {
            let minify = match (minify, no_minify) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let target = if stdout {
                commands::export::Target::Stdout
            } else {
                commands::export::Target::Dir(output)
            };
            commands::export::run(&config, target, minify, open).await?;
        }
        Commands::Preview { json } => {
            commands::preview::run(&config, json).await?;
        }
        Commands::Watch { output, json } => {
            commands::watch::run(&config, output, json).await?;
        }
        Commands::Clear => {
            commands::clear::run(&config).await?;
        }
    }

    Ok(())
}
