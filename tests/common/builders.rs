//! Roster builders
//!
//! `doctor_with_pending("doctor001", 2)` produces a record with two unreviewed tasks
//! plus one reviewed task, so counts always have to be derived, never copied.

use serde_json::{json, Value};
use std::sync::Arc;
use triage_assignment::{
    DoctorDirectory, DoctorRecord, InMemoryDirectory, StrategyKind, TaskAssigner, TaskRecord,
    TaskStatus,
};

pub const DEFAULT_HOSPITAL: &str = "hospital001";

pub fn doctor_in(hospital_id: &str, id: &str, pending: usize) -> DoctorRecord {
    let mut tasks: Vec<TaskRecord> = (0..pending)
        .map(|i| TaskRecord {
            id: format!("{id}-pending-{i}"),
            status: TaskStatus::Unreviewed,
        })
        .collect();
    tasks.push(TaskRecord {
        id: format!("{id}-done"),
        status: TaskStatus::Reviewed,
    });

    DoctorRecord {
        id: id.to_string(),
        name: format!("Dr. {id}"),
        hospital_id: hospital_id.to_string(),
        hospital_name: format!("{hospital_id} General"),
        tasks,
    }
}

pub fn doctor_with_pending(id: &str, pending: usize) -> DoctorRecord {
    doctor_in(DEFAULT_HOSPITAL, id, pending)
}

pub fn in_memory_assigner(records: Vec<DoctorRecord>) -> (TaskAssigner, InMemoryDirectory) {
    let directory = InMemoryDirectory::new(records);
    let shared: Arc<dyn DoctorDirectory> = Arc::new(directory.clone());
    let assigner = TaskAssigner::with_strategy_kind(shared, StrategyKind::LoadBalance)
        .expect("load_balance is implemented");
    (assigner, directory)
}

/// Fixture/platform JSON for a record, in the source's camelCase shape
pub fn record_json(record: &DoctorRecord) -> Value {
    serde_json::to_value(record).expect("record serializes")
}

pub fn fixture_json(records: &[DoctorRecord]) -> Value {
    json!({ "data": records.iter().map(record_json).collect::<Vec<_>>() })
}
