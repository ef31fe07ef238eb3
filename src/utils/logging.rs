//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the CampusEvents services.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender guard when a log file is configured; the caller must
/// keep it alive for the lifetime of the process or buffered lines are lost
/// on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::new(&config.level);
    let registry = tracing_subscriber::registry().with(filter);

    let guard = match &config.file_path {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "campusevents.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            if config.json {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking);
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout))
                    .with(file_layer)
                    .init();
            } else {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking);
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                    .with(file_layer)
                    .init();
            }
            Some(guard)
        }
        None => {
            if config.json {
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout))
                    .init();
            } else {
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                    .init();
            }
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event lifecycle actions with structured data
pub fn log_event_action(event_id: i64, action: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        details = details,
        "Event action performed"
    );
}

/// Log a recorded approval decision
pub fn log_decision_recorded(event_id: i64, outcome: &str, recipient_id: i64) {
    info!(
        event_id = event_id,
        outcome = outcome,
        recipient_id = recipient_id,
        "Decision recorded"
    );
}
