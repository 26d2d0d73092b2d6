//! Assignment Request/Result
//!
//! The values exchanged with the surrounding service: what to assign, and who got it.

use serde::{Deserialize, Serialize};

/// An incoming request to assign one review task to a doctor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Patient the triage case belongs to
    pub user_id: String,
    pub scenario_id: String,
    pub task_id: String,
    /// Restricts candidates to one hospital when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    /// Accepted but not consumed by any implemented strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<String>,
}

impl AssignmentRequest {
    pub fn new(
        user_id: impl Into<String>,
        scenario_id: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            scenario_id: scenario_id.into(),
            task_id: task_id.into(),
            hospital_id: None,
            urgency_level: None,
        }
    }

    pub fn with_hospital(mut self, hospital_id: impl Into<String>) -> Self {
        self.hospital_id = Some(hospital_id.into());
        self
    }

    pub fn with_urgency(mut self, urgency_level: impl Into<String>) -> Self {
        self.urgency_level = Some(urgency_level.into());
        self
    }

    /// Hospital filter to apply; an empty id means no filter
    pub fn hospital_filter(&self) -> Option<&str> {
        self.hospital_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Outcome of a single assignment decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub doctor_id: String,
    /// Human-readable explanation of the choice
    pub assignment_reason: String,
    pub strategy_used: String,
}
