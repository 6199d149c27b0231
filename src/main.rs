//! formfill - fill web forms with synthetic values.
//!
//! Main entry point for the formfill CLI.

mod cli;
mod cmd_fill;
mod cmd_key;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use formfill_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use formfill_credentials::FileCredentialStore;

use crate::cli::{Cli, Commands};
use crate::cmd_fill::{FillOutput, gemini_settings, handle_fill_command};
use crate::cmd_key::handle_key_command;

/// Initialize tracing with console output and, when enabled, daily log files.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Console on stderr so `fill --json` keeps stdout clean.
    let console = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    if !logging.file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console)
            .init();
        return Ok(());
    }

    let log_dir = logging.resolved_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("formfill")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes buffered lines on drop and must outlive main.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Load the config file and apply command line overrides.
fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    if let Some(ref model) = cli.model {
        config.generator.model = model.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging)?;

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    debug!(model = %config.generator.model, "Configuration loaded");

    let store = FileCredentialStore::new(config.credentials.resolved_path());

    let succeeded = match cli.command {
        Commands::Key { action } => handle_key_command(action, &store).await?,
        Commands::Fill {
            snapshot,
            output,
            json,
        } => {
            let output = FillOutput {
                file: output.as_deref(),
                stdout: json,
            };
            handle_fill_command(&snapshot, output, gemini_settings(&config.generator), &store)
                .await?
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
