//! Round-robin strategy slot.
//!
//! Rotation needs a persisted pointer (per hospital or global) that the assignment
//! core does not own, so selection is not available yet.

use super::{AssignmentStrategy, Selection};
use crate::constants::strategies;
use crate::error::{AssignmentError, Result};
use crate::models::{AssignmentRequest, Doctor};

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinStrategy;

impl AssignmentStrategy for RoundRobinStrategy {
    fn name(&self) -> &'static str {
        strategies::ROUND_ROBIN
    }

    fn select(&self, _candidates: &[Doctor], _request: &AssignmentRequest) -> Result<Selection> {
        Err(AssignmentError::strategy_not_implemented(self.name()))
    }
}
