//! `unilog` command line tool.
//!
//! Loads a logging configuration, then either prints the resulting logger
//! levels, writes a single message through a named logger, or watches the
//! configuration file and re-applies levels whenever it changes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use unilog::config::{self, watcher, ConfigWatcher, LoggingConfig};
use unilog::observability::init_logging;
use unilog::registry::{self, Registry};
use unilog::Severity;

#[derive(Parser)]
#[command(name = "unilog")]
#[command(about = "Inspect and exercise a named-logger configuration", long_about = None)]
struct Cli {
    /// Path to a TOML logging configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every configured logger and its level as JSON
    Levels,
    /// Write one message through a named logger
    Emit {
        /// Logger name
        #[arg(short, long)]
        logger: String,

        /// Severity of the message (Debug, Verbose, Info, Warn, Error)
        #[arg(short = 'L', long, default_value = "Info")]
        level: Severity,

        message: String,
    },
    /// Watch the configuration file and re-apply levels on change
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => LoggingConfig::default(),
    };
    init_logging(&config.observability);

    if registry::init_global(Registry::from_config(&config)?).is_err() {
        tracing::warn!("Global registry already initialized, using existing instance");
    }
    let registry = registry::global();

    match cli.command {
        Commands::Levels => {
            let levels = registry.current_logger_levels();
            println!("{}", serde_json::to_string_pretty(&levels)?);
        }
        Commands::Emit {
            logger,
            level,
            message,
        } => {
            let logger = registry.get_logger(&logger);
            if !logger.is_enabled(level) {
                tracing::debug!(
                    logger = logger.name(),
                    level = %level,
                    threshold = %logger.level(),
                    "Message below threshold"
                );
            }
            logger.log(level, &message)?;
        }
        Commands::Watch => {
            let Some(path) = cli.config.as_deref() else {
                return Err("watch requires --config".into());
            };
            let (config_watcher, updates) = ConfigWatcher::new(path);
            let _watcher = config_watcher.run()?;

            tokio::select! {
                applied = watcher::apply_updates(registry, updates) => {
                    tracing::info!(applied, "Config watcher stopped");
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received");
                }
            }
        }
    }

    Ok(())
}
