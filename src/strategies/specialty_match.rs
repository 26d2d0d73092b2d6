//! Specialty-match strategy slot. Doctors carry no specialty data yet.

use super::{AssignmentStrategy, Selection};
use crate::constants::strategies;
use crate::error::{AssignmentError, Result};
use crate::models::{AssignmentRequest, Doctor};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialtyMatchStrategy;

impl AssignmentStrategy for SpecialtyMatchStrategy {
    fn name(&self) -> &'static str {
        strategies::SPECIALTY_MATCH
    }

    fn select(&self, _candidates: &[Doctor], _request: &AssignmentRequest) -> Result<Selection> {
        Err(AssignmentError::strategy_not_implemented(self.name()))
    }
}
