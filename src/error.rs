//! # Assignment Errors
//!
//! Error taxonomy for the assignment core. Every failure of `assign_task` and of the
//! directory adapters is one of these variants; nothing is swallowed or retried here.

use crate::config::ConfigurationError;
use thiserror::Error;

/// Errors returned by the assignment core
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// A required request identifier is missing or blank
    #[error("Invalid assignment request: {field} must not be empty")]
    InvalidRequest { field: &'static str },

    /// The doctor directory's backing source could not be read or parsed
    #[error("Doctor directory source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// No candidate doctors remain after hospital filtering
    #[error("No available doctor{}", hospital_suffix(.hospital_id))]
    NoAvailableDoctor { hospital_id: Option<String> },

    /// The configured strategy has no working selection algorithm
    #[error("Assignment strategy '{strategy}' is not yet implemented")]
    StrategyNotImplemented { strategy: String },

    /// A doctor lookup by id found nothing
    #[error("Doctor not found: {doctor_id}")]
    DoctorNotFound { doctor_id: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

fn hospital_suffix(hospital_id: &Option<String>) -> String {
    match hospital_id {
        Some(id) => format!(" in hospital {id}"),
        None => String::new(),
    }
}

impl AssignmentError {
    /// Create a source unavailable error
    pub fn source_unavailable<S: Into<String>, R: std::fmt::Display>(
        source_name: S,
        reason: R,
    ) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a no available doctor error for an optional hospital filter
    pub fn no_available_doctor(hospital_id: Option<&str>) -> Self {
        Self::NoAvailableDoctor {
            hospital_id: hospital_id.map(str::to_string),
        }
    }

    /// Create a strategy not implemented error
    pub fn strategy_not_implemented<S: Into<String>>(strategy: S) -> Self {
        Self::StrategyNotImplemented {
            strategy: strategy.into(),
        }
    }

    /// Whether a caller may retry the same request unchanged.
    ///
    /// Only directory read failures are transient; the core itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// Stable short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request",
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::NoAvailableDoctor { .. } => "no_available_doctor",
            Self::StrategyNotImplemented { .. } => "strategy_not_implemented",
            Self::DoctorNotFound { .. } => "doctor_not_found",
            Self::Configuration(_) => "configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, AssignmentError>;
