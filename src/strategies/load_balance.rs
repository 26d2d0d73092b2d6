//! Load-balance strategy: least pending reviews wins, lowest id breaks ties.

use std::cmp::Ordering;

use super::{AssignmentStrategy, Selection};
use crate::constants::strategies;
use crate::error::{AssignmentError, Result};
use crate::models::{AssignmentRequest, Doctor};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadBalanceStrategy;

/// Total order `(pending_task_count asc, id asc)`
pub fn load_order(a: &Doctor, b: &Doctor) -> Ordering {
    a.pending_task_count
        .cmp(&b.pending_task_count)
        .then_with(|| a.id.cmp(&b.id))
}

impl AssignmentStrategy for LoadBalanceStrategy {
    fn name(&self) -> &'static str {
        strategies::LOAD_BALANCE
    }

    fn select(&self, candidates: &[Doctor], request: &AssignmentRequest) -> Result<Selection> {
        let chosen = candidates
            .iter()
            .min_by(|a, b| load_order(a, b))
            .ok_or_else(|| AssignmentError::no_available_doctor(request.hospital_filter()))?;

        Ok(Selection {
            doctor_id: chosen.id.clone(),
            reason: format!(
                "load-balance assignment: doctor {} currently has {} pending task(s), \
                 the minimum among available doctors.",
                chosen.name, chosen.pending_task_count
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: &str, pending: u32) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr. {id}"),
            hospital_id: "hospital001".to_string(),
            hospital_name: "City General".to_string(),
            pending_task_count: pending,
        }
    }

    fn request() -> AssignmentRequest {
        AssignmentRequest::new("patient-1", "triage", "task-1")
    }

    #[test]
    fn picks_least_loaded_doctor() {
        let candidates = vec![doctor("doctor001", 2), doctor("doctor002", 1), doctor("doctor003", 0)];
        let selection = LoadBalanceStrategy.select(&candidates, &request()).unwrap();
        assert_eq!(selection.doctor_id, "doctor003");
    }

    #[test]
    fn ties_go_to_lower_id_regardless_of_order() {
        let candidates = vec![doctor("doctor002", 1), doctor("doctor001", 1)];
        let selection = LoadBalanceStrategy.select(&candidates, &request()).unwrap();
        assert_eq!(selection.doctor_id, "doctor001");
    }

    #[test]
    fn reason_names_doctor_and_count() {
        let candidates = vec![doctor("doctor007", 3)];
        let selection = LoadBalanceStrategy.select(&candidates, &request()).unwrap();
        assert_eq!(
            selection.reason,
            "load-balance assignment: doctor Dr. doctor007 currently has 3 pending task(s), \
             the minimum among available doctors."
        );
    }

    #[test]
    fn empty_candidates_is_an_error_not_a_panic() {
        let result = LoadBalanceStrategy.select(&[], &request().with_hospital("hospital009"));
        match result {
            Err(AssignmentError::NoAvailableDoctor { hospital_id }) => {
                assert_eq!(hospital_id.as_deref(), Some("hospital009"))
            }
            other => panic!("expected NoAvailableDoctor, got {other:?}"),
        }
    }

    #[test]
    fn id_comparison_is_lexicographic() {
        // "doctor10" < "doctor9" as strings
        let candidates = vec![doctor("doctor9", 0), doctor("doctor10", 0)];
        let selection = LoadBalanceStrategy.select(&candidates, &request()).unwrap();
        assert_eq!(selection.doctor_id, "doctor10");
    }
}
