//! CourseRAG CLI — the main entry point.
//!
//! Commands:
//! - `serve`   — Start the HTTP API server
//! - `status`  — Show effective configuration
//! - `format`  — Run the configured formatters over the sources
//! - `lint`    — Run the configured linters

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use courserag_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "courserag",
    about = "CourseRAG — course materials assistant API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config.toml (defaults to ~/.courserag/config.toml)
    #[arg(short, long, global = true, env = "COURSERAG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show effective configuration
    Status,

    /// Format all Rust sources
    Format {
        /// Only check formatting, do not modify files
        #[arg(long)]
        check: bool,
    },

    /// Run linters (type check failures are advisory)
    Lint,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"));
    let config = AppConfig::load_with_env(&config_path)
        .map_err(|e| format!("Failed to load config: {e}"))?;

    let success = match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(config, port).await?;
            true
        }
        Commands::Status => {
            commands::status::run(&config, &config_path);
            true
        }
        Commands::Format { check } => commands::format::run(&config.tooling, check).await,
        Commands::Lint => commands::lint::run(&config.tooling).await,
    };

    if !success {
        std::process::exit(1);
    }

    Ok(())
}
