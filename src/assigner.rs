//! # Task Assigner
//!
//! Single-shot assignment of one review task: validate the request, read the current
//! candidates from the doctor directory, let the configured strategy choose, and
//! wrap the choice in an [`AssignmentResult`].
//!
//! The assigner holds no state between calls. Every call re-reads the roster, so
//! concurrent calls never block each other. No reservation is taken on the chosen
//! doctor: two calls that read the same counts may pick the same doctor.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::AssignmentConfig;
use crate::directory::DoctorDirectory;
use crate::error::{AssignmentError, Result};
use crate::logging::log_assignment_operation;
use crate::models::{AssignmentRequest, AssignmentResult, Doctor};
use crate::strategies::{AssignmentStrategy, StrategyKind};
use crate::validation::validate_assignment_request;

/// Orchestrates directory reads and strategy selection
#[derive(Clone)]
pub struct TaskAssigner {
    directory: Arc<dyn DoctorDirectory>,
    strategy: Arc<dyn AssignmentStrategy>,
}

impl std::fmt::Debug for TaskAssigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskAssigner")
            .field("directory", &self.directory.source_name())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl TaskAssigner {
    /// Build an assigner around any strategy object.
    ///
    /// Placeholder strategies are accepted here and fail on each call.
    pub fn new(directory: Arc<dyn DoctorDirectory>, strategy: Arc<dyn AssignmentStrategy>) -> Self {
        Self {
            directory,
            strategy,
        }
    }

    /// Build an assigner for a configured strategy name, refusing placeholders up front
    pub fn with_strategy_kind(directory: Arc<dyn DoctorDirectory>, kind: StrategyKind) -> Result<Self> {
        if !kind.is_implemented() {
            return Err(AssignmentError::strategy_not_implemented(kind.as_str()));
        }
        Ok(Self::new(directory, kind.build()))
    }

    /// Build the directory adapter and strategy described by `config`
    pub fn from_config(config: &AssignmentConfig) -> Result<Self> {
        let directory = config.build_directory()?;
        Self::with_strategy_kind(directory, config.strategy)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn directory(&self) -> &Arc<dyn DoctorDirectory> {
        &self.directory
    }

    /// Assign one review task to a doctor
    pub async fn assign_task(&self, request: &AssignmentRequest) -> Result<AssignmentResult> {
        let outcome = self.decide(request).await;

        match &outcome {
            Ok(result) => log_assignment_operation(
                "assign_task",
                Some(&request.task_id),
                Some(&result.doctor_id),
                &result.strategy_used,
                "assigned",
                Some(&result.assignment_reason),
            ),
            Err(e) => {
                warn!(
                    task_id = %request.task_id,
                    hospital_id = request.hospital_filter(),
                    error_kind = e.kind(),
                    error = %e,
                    "Task assignment failed"
                );
                log_assignment_operation(
                    "assign_task",
                    Some(&request.task_id),
                    None,
                    self.strategy.name(),
                    e.kind(),
                    Some(&e.to_string()),
                );
            }
        }

        outcome
    }

    async fn decide(&self, request: &AssignmentRequest) -> Result<AssignmentResult> {
        validate_assignment_request(request)?;

        let hospital_filter = request.hospital_filter();
        let candidates = self.directory.list_doctors(hospital_filter).await?;
        if candidates.is_empty() {
            return Err(AssignmentError::no_available_doctor(hospital_filter));
        }

        debug!(
            task_id = %request.task_id,
            candidates = candidates.len(),
            urgency_level = request.urgency_level.as_deref(),
            strategy = self.strategy.name(),
            "Selecting doctor"
        );

        let selection = self.strategy.select(&candidates, request)?;

        info!(
            task_id = %request.task_id,
            user_id = %request.user_id,
            scenario_id = %request.scenario_id,
            doctor_id = %selection.doctor_id,
            strategy = self.strategy.name(),
            "Task assigned"
        );

        Ok(AssignmentResult {
            doctor_id: selection.doctor_id,
            assignment_reason: selection.reason,
            strategy_used: self.strategy.name().to_string(),
        })
    }

    /// The candidates an assignment would currently consider
    pub async fn available_doctors(&self, hospital_id: Option<&str>) -> Result<Vec<Doctor>> {
        let hospital_filter = hospital_id.filter(|id| !id.is_empty());
        self.directory.list_doctors(hospital_filter).await
    }
}
