//! In-memory directory
//!
//! Holds source records behind a lock so an embedding service (or a test) can change
//! task statuses between reads. Counts are still derived per read, never stored.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use super::DoctorDirectory;
use crate::error::{AssignmentError, Result};
use crate::models::{DoctorRecord, TaskRecord, TaskStatus};

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    records: Arc<RwLock<Vec<DoctorRecord>>>,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<DoctorRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Replace the whole roster
    pub fn replace_records(&self, records: Vec<DoctorRecord>) {
        *self.records.write() = records;
    }

    /// Attach a new task to a doctor
    pub fn push_task(&self, doctor_id: &str, task: TaskRecord) -> Result<()> {
        let mut records = self.records.write();
        let record = find_mut(&mut records, doctor_id)?;
        record.tasks.push(task);
        Ok(())
    }

    /// Change the status of one of a doctor's tasks; returns whether the task existed
    pub fn set_task_status(&self, doctor_id: &str, task_id: &str, status: TaskStatus) -> Result<bool> {
        let mut records = self.records.write();
        let record = find_mut(&mut records, doctor_id)?;
        match record.tasks.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn find_mut<'a>(records: &'a mut [DoctorRecord], doctor_id: &str) -> Result<&'a mut DoctorRecord> {
    records
        .iter_mut()
        .find(|record| record.id == doctor_id)
        .ok_or_else(|| AssignmentError::DoctorNotFound {
            doctor_id: doctor_id.to_string(),
        })
}

#[async_trait]
impl DoctorDirectory for InMemoryDirectory {
    fn source_name(&self) -> &'static str {
        "in_memory"
    }

    async fn fetch_records(&self, hospital_filter: Option<&str>) -> Result<Vec<DoctorRecord>> {
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|record| hospital_filter.is_none_or(|id| record.hospital_id == id))
            .cloned()
            .collect())
    }
}
