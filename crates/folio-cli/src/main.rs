use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A single-page developer portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (JSON); overrides the configured path
    #[arg(short = 'c', long = "content")]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Show or set the persisted theme preference
    Theme {
        /// "light" or "dark"; omit to print the current preference
        mode: Option<String>,
    },
    /// List the page sections in order
    Sections,
    /// Validate the content file and configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let content_path = cli.content.or_else(|| config.general.content_path.clone());

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, content_path),
        Some(Commands::Theme { mode }) => commands::theme::run(mode.as_deref()),
        Some(Commands::Sections) => commands::sections::run(content_path),
        Some(Commands::Check) => commands::check::run(&config, content_path),
    }
}
