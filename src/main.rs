//! # Main Entry Point
//!
//! Boots the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Remark service, Clock/RNG
//! - Application: Trigger table, Pause/Cooldown state, Dispatcher, Logging
//!

mod application;
mod domain;
mod infrastructure;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::config::SyncSettings;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::dispatcher::Dispatcher;
use crate::application::state::BotState;
use crate::application::triggers::TriggerTable;
use crate::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::infrastructure::matrix::{self, MatrixService};
use crate::infrastructure::remarks::HttpRemarkSource;
use crate::infrastructure::system::{SystemClock, ThreadRandom};
use crate::strings::logs;

/// Matrix bot that answers "I'm hungry" with "Hi hungry, I'm Dad!"
#[derive(Debug, Parser)]
#[command(name = "dadbot", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Matrix password (overrides the config file and environment)
    #[arg(short, long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _log_guard = application::logging::init(&config.logging)?;

    // 3. Core components
    let password = config
        .services
        .matrix
        .resolve_password(cli.password.as_deref())?;
    let table = TriggerTable::standard().context("Failed to compile trigger patterns")?;
    tracing::debug!(rules = table.len(), "Trigger table ready");
    let state = Arc::new(BotState::new(&config.triggers, Arc::new(SystemClock)));
    let remarks = Arc::new(
        HttpRemarkSource::new(&config.remarks).context("Failed to build remark HTTP client")?,
    );

    // 4. Matrix Setup
    let client = matrix::connect(&config.services.matrix, &password).await?;
    let bot_id = client
        .user_id()
        .map(|id| id.to_string())
        .context("Logged in without a user id")?;

    let dispatcher = Arc::new(Dispatcher::new(
        bot_id,
        Arc::new(MatrixService::new(client.clone())),
        table,
        state,
        remarks,
        Arc::new(ThreadRandom),
    ));
    matrix::register_handlers(&client, dispatcher, std::time::SystemTime::now());

    tracing::info!(event = "startup", service = logs::SERVICE, "{}", logs::STARTUP);

    // 5. Sync until it fails or we are told to stop
    tokio::select! {
        res = client.sync(SyncSettings::default()) => {
            if let Err(e) = res {
                tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
            }
        }
        res = shutdown_signal() => {
            if let Err(e) = res {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            }
        }
    }

    tracing::info!(event = "shutdown", service = logs::SERVICE, "{}", logs::SHUTDOWN);
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
