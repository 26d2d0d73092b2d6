//! Proptest strategies for doctor rosters

use proptest::prelude::*;
use triage_assignment::{DoctorRecord, TaskRecord, TaskStatus};

pub fn hospital_id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["hospital001", "hospital002", "hospital003"]).prop_map(String::from)
}

pub fn task_status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![Just(TaskStatus::Unreviewed), Just(TaskStatus::Reviewed)]
}

/// A record whose id is filled in by [`roster_strategy`]
fn record_strategy() -> impl Strategy<Value = DoctorRecord> {
    (
        hospital_id_strategy(),
        prop::collection::vec(task_status_strategy(), 0..8),
    )
        .prop_map(|(hospital_id, statuses)| DoctorRecord {
            id: String::new(),
            name: String::new(),
            hospital_name: format!("{hospital_id} General"),
            hospital_id,
            tasks: statuses
                .into_iter()
                .enumerate()
                .map(|(i, status)| TaskRecord {
                    id: format!("task-{i}"),
                    status,
                })
                .collect(),
        })
}

/// Rosters with unique, shuffled doctor ids
pub fn roster_strategy(max_len: usize) -> impl Strategy<Value = Vec<DoctorRecord>> {
    prop::collection::vec(record_strategy(), 0..max_len)
        .prop_map(|records| {
            records
                .into_iter()
                .enumerate()
                .map(|(i, mut record)| {
                    record.id = format!("doctor{i:03}");
                    record.name = format!("Dr. {i}");
                    record
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}
