//! Account manager for the web interface (acctctl)

use acctctl::cli;
use acctctl::config::{Config, LoggingConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "acctctl")]
#[command(about = "Manage accounts for the web interface", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "acctctl.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage account for accessing web interface
    Account {
        #[command(subcommand)]
        command: cli::account::AccountCommands,
    },

    /// Show version information
    Version,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Logs go to stderr; stdout carries command output
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?;
    init_tracing(&config.logging);
    tracing::debug!(config = %cli.config, database = %config.database.path.display(), "configuration loaded");

    match cli.command {
        Commands::Account { command } => {
            cli::account::run(&config, command).await
        }
        Commands::Version => {
            println!("acctctl version {}", env!("CARGO_PKG_VERSION"));
            println!("Schema version: {}", acctctl::db::SCHEMA_VERSION);
            Ok(())
        }
    }
}
