//! Doctor Roster Models
//!
//! `DoctorRecord` is the shape the backing source hands us (doctor plus owned tasks).
//! `Doctor` is the candidate view the strategies see, with the pending count derived
//! from the record at read time.

use serde::{Deserialize, Serialize};

use crate::constants::task_status_codes;
use crate::utils::serde::deserialize_string_or_integer;

/// Review status of a task, carried on the wire as a two-valued integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    Unreviewed,
    Reviewed,
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            task_status_codes::UNREVIEWED => Ok(Self::Unreviewed),
            task_status_codes::REVIEWED => Ok(Self::Reviewed),
            other => Err(format!(
                "unknown task status code {other} (expected {} or {})",
                task_status_codes::UNREVIEWED,
                task_status_codes::REVIEWED
            )),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Unreviewed => task_status_codes::UNREVIEWED,
            TaskStatus::Reviewed => task_status_codes::REVIEWED,
        }
    }
}

/// A review task owned by a doctor in the source of truth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(deserialize_with = "deserialize_string_or_integer")]
    pub id: String,
    pub status: TaskStatus,
}

/// A doctor as returned by the directory's backing source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    #[serde(deserialize_with = "deserialize_string_or_integer")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_string_or_integer")]
    pub hospital_id: String,
    #[serde(default)]
    pub hospital_name: String,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl DoctorRecord {
    /// Number of tasks still awaiting review
    pub fn pending_task_count(&self) -> u32 {
        let pending = self
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Unreviewed)
            .count();
        u32::try_from(pending).unwrap_or(u32::MAX)
    }

    /// Derive the candidate view, computing the pending count from the current tasks
    pub fn to_doctor(&self) -> Doctor {
        Doctor {
            id: self.id.clone(),
            name: self.name.clone(),
            hospital_id: self.hospital_id.clone(),
            hospital_name: self.hospital_name.clone(),
            pending_task_count: self.pending_task_count(),
        }
    }
}

/// A candidate doctor with a freshly derived pending-task count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub hospital_id: String,
    pub hospital_name: String,
    pub pending_task_count: u32,
}

/// A hospital known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    #[serde(alias = "hospitalId", deserialize_with = "deserialize_string_or_integer")]
    pub id: String,
    #[serde(alias = "hospitalName", default)]
    pub name: String,
}
