//! # Assignment Strategies
//!
//! A strategy picks one doctor from a non-empty candidate list and explains the
//! choice. Each strategy is its own type behind [`AssignmentStrategy`];
//! [`StrategyKind`] is the configuration-level name used to build one.
//!
//! Only `load_balance` has a selection algorithm. `round_robin` and
//! `specialty_match` occupy their slots and fail with `StrategyNotImplemented`.

pub mod load_balance;
pub mod round_robin;
pub mod specialty_match;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::ConfigurationError;
use crate::constants::strategies;
use crate::error::Result;
use crate::models::{AssignmentRequest, Doctor};

pub use load_balance::LoadBalanceStrategy;
pub use round_robin::RoundRobinStrategy;
pub use specialty_match::SpecialtyMatchStrategy;

/// The doctor a strategy chose and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub doctor_id: String,
    pub reason: String,
}

/// Decision unit over a candidate list
pub trait AssignmentStrategy: Send + Sync + fmt::Debug {
    /// Name reported in `AssignmentResult::strategy_used`
    fn name(&self) -> &'static str;

    /// Pick one of `candidates` for `request`.
    ///
    /// Must be deterministic for a given candidate list.
    fn select(&self, candidates: &[Doctor], request: &AssignmentRequest) -> Result<Selection>;
}

/// Configured strategy name, resolved once when an assigner is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    LoadBalance,
    RoundRobin,
    SpecialtyMatch,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::LoadBalance,
        StrategyKind::RoundRobin,
        StrategyKind::SpecialtyMatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::LoadBalance => strategies::LOAD_BALANCE,
            StrategyKind::RoundRobin => strategies::ROUND_ROBIN,
            StrategyKind::SpecialtyMatch => strategies::SPECIALTY_MATCH,
        }
    }

    /// Whether the strategy has a working selection algorithm
    pub fn is_implemented(&self) -> bool {
        matches!(self, StrategyKind::LoadBalance)
    }

    pub fn build(&self) -> Arc<dyn AssignmentStrategy> {
        match self {
            StrategyKind::LoadBalance => Arc::new(LoadBalanceStrategy),
            StrategyKind::RoundRobin => Arc::new(RoundRobinStrategy),
            StrategyKind::SpecialtyMatch => Arc::new(SpecialtyMatchStrategy),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigurationError;

    /// Accepts snake_case or kebab-case, case-insensitively
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                ConfigurationError::invalid_value(
                    "strategy",
                    s,
                    format!(
                        "expected one of {}",
                        StrategyKind::ALL.map(|k| k.as_str()).join(", ")
                    ),
                )
            })
    }
}
