#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Triage Assignment
//!
//! Assigns AI-triage review tasks to the doctor who signs them off.
//!
//! ## Overview
//!
//! Given a pool of doctors and the number of reviews each still has pending, the
//! assigner deterministically picks one, explains why, and reports which strategy made
//! the choice. Everything around that decision (HTTP handlers, review pages, task
//! registration on the approval platform) belongs to the surrounding service.
//!
//! ## Module Organization
//!
//! - [`models`] - Doctor roster and assignment request/result values
//! - [`directory`] - Doctor directory trait with fixture, platform and in-memory adapters
//! - [`strategies`] - Pluggable selection strategies
//! - [`assigner`] - The orchestrating [`TaskAssigner`]
//! - [`config`] - Layered configuration
//! - [`error`] - Error taxonomy
//! - [`logging`] - Structured logging setup
//! - [`utils`] - Lenient serde helpers for identifiers and credentials
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use triage_assignment::{AssignmentRequest, FixtureDirectory, StrategyKind, TaskAssigner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = Arc::new(FixtureDirectory::new("data/test_doctors.json"));
//! let assigner = TaskAssigner::with_strategy_kind(directory, StrategyKind::LoadBalance)?;
//!
//! let request = AssignmentRequest::new("patient-42", "triage", "task-abc").with_hospital("hospital001");
//! let result = assigner.assign_task(&request).await?;
//! println!("{} -> {} ({})", request.task_id, result.doctor_id, result.assignment_reason);
//! # Ok(())
//! # }
//! ```

pub mod assigner;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod logging;
pub mod models;
pub mod strategies;
pub mod utils;
pub mod validation;

pub use assigner::TaskAssigner;
pub use config::{AssignmentConfig, ConfigManager, ConfigurationError, DirectoryConfig};
pub use directory::{
    DoctorDirectory, FixtureDirectory, InMemoryDirectory, PlatformDirectory,
    PlatformDirectoryConfig,
};
pub use error::{AssignmentError, Result};
pub use models::{
    AssignmentRequest, AssignmentResult, Doctor, DoctorRecord, Hospital, TaskRecord, TaskStatus,
};
pub use strategies::{
    AssignmentStrategy, LoadBalanceStrategy, RoundRobinStrategy, Selection, SpecialtyMatchStrategy,
    StrategyKind,
};
