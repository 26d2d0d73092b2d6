//! Input validation for assignment requests
//!
//! Requests arrive from the surrounding service layer; the identifiers that tie an
//! assignment back to a patient, scenario and task must be present before any
//! directory read happens.

use crate::error::{AssignmentError, Result};
use crate::models::AssignmentRequest;

/// Validates that the required identifiers are non-empty.
///
/// Whitespace-only values count as empty. Fields are checked in the order
/// `user_id`, `scenario_id`, `task_id`; the first blank one is reported.
pub fn validate_assignment_request(request: &AssignmentRequest) -> Result<()> {
    require_identifier("user_id", &request.user_id)?;
    require_identifier("scenario_id", &request.scenario_id)?;
    require_identifier("task_id", &request.task_id)?;
    Ok(())
}

fn require_identifier(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssignmentError::InvalidRequest { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_is_valid() {
        let request = AssignmentRequest::new("patient-1", "triage", "task-1");
        assert!(validate_assignment_request(&request).is_ok());
    }

    #[test]
    fn reports_first_blank_field() {
        let request = AssignmentRequest::new("", "", "task-1");
        match validate_assignment_request(&request) {
            Err(AssignmentError::InvalidRequest { field }) => assert_eq!(field, "user_id"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let request = AssignmentRequest::new("patient-1", "triage", "   ");
        match validate_assignment_request(&request) {
            Err(AssignmentError::InvalidRequest { field }) => assert_eq!(field, "task_id"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_are_not_required() {
        let request = AssignmentRequest::new("patient-1", "triage", "task-1").with_hospital("");
        assert!(validate_assignment_request(&request).is_ok());
    }
}
