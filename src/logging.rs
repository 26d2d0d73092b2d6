//! # Structured Logging Module
//!
//! Environment-aware structured logging for the assignment core and its command-line
//! front end. Library code only emits `tracing` events; installing a subscriber is the
//! embedding binary's choice.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::loader::detect_environment;
use crate::constants;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// `RUST_LOG` wins over the environment default. `TRIAGE_LOG_FORMAT=json` switches the
/// console output to JSON lines. Safe to call more than once.
pub fn init_structured_logging() {
    init_with_default_level(None);
}

/// Same as [`init_structured_logging`] with an explicit fallback level (e.g. from `-v`)
pub fn init_with_default_level(level: Option<&str>) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = detect_environment();
        let default_level = level
            .map(str::to_string)
            .unwrap_or_else(|| get_log_level(&environment).to_string());
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

        let json_output = std::env::var(constants::env::LOG_FORMAT)
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let console_layer = if json_output {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_filter(filter)
                .boxed()
        };

        // A global subscriber may already be installed by the embedding service
        if tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already initialized - continuing");
        }

        tracing::debug!(
            environment = %environment,
            level = %default_level,
            json = json_output,
            "Structured logging initialized"
        );
    });
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        "test" => "warn",
        _ => "debug",
    }
}

/// Log structured data for assignment operations
pub fn log_assignment_operation(
    operation: &str,
    task_id: Option<&str>,
    doctor_id: Option<&str>,
    strategy: &str,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        task_id = task_id,
        doctor_id = doctor_id,
        strategy = %strategy,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "ASSIGNMENT_OPERATION"
    );
}
