//! Command-line entry point for Savvy.
//!
//! Loads transactions from the configured JSON store and prints the requested
//! view as JSON on stdout. Logs go to stderr.
//!
//! Usage: savvy <predict|summary|list> [--month YYYY-MM]. Run `savvy --help`
//! for details.

mod args;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use savvy_core::prediction::PredictionService;
use savvy_shared::config::LoggingConfig;
use savvy_shared::{AppConfig, AppError, AppResult};
use savvy_store::JsonTransactionStore;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};

/// Exit code for a request the pipeline rejected (bad filter, no data, ...).
const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let path = &config.store.transactions_path;
    let store = JsonTransactionStore::open(path)
        .with_context(|| format!("failed to open transaction store at {path}"))?;
    let service = PredictionService::new(Arc::new(store));

    let month = cli.month.as_deref();
    info!(command = ?cli.command, month, "running command");

    match cli.command {
        Command::Predict => respond(service.predict_savings(month).map_err(AppError::from)),
        Command::Summary => respond(service.monthly_summary(month).map_err(AppError::from)),
        Command::List => respond(service.list_transactions(month).map_err(AppError::from)),
    }
}

/// Prints a successful result, or the mapped error body for a rejected one.
fn respond<T: Serialize>(outcome: AppResult<T>) -> anyhow::Result<ExitCode> {
    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");

            let body = json!({
                "error": err.to_string(),
                "code": err.error_code(),
                "status": err.status_code(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
