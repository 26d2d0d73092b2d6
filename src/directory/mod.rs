//! # Doctor Directory
//!
//! Read-only access to the doctor roster. The assigner depends only on the
//! [`DoctorDirectory`] trait; which backing source sits behind it (a fixture file, the
//! live approval platform, or records held in memory) is decided by whoever builds the
//! assigner.
//!
//! Adapters implement [`DoctorDirectory::fetch_records`]. The provided methods do the
//! rest: they re-apply the hospital filter by exact match and derive each doctor's
//! pending count from the records of the current read, so nothing is cached between
//! calls.

pub mod fixture;
pub mod in_memory;
pub mod platform;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{AssignmentError, Result};
use crate::models::{Doctor, DoctorRecord, Hospital};

pub use fixture::FixtureDirectory;
pub use in_memory::InMemoryDirectory;
pub use platform::{PlatformDirectory, PlatformDirectoryConfig};

/// Source of doctors and their review workload
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    /// Short label of the backing source, used in logs and errors
    fn source_name(&self) -> &'static str;

    /// Read the raw doctor records, optionally narrowed to one hospital.
    ///
    /// Adapters may apply the filter at the source or ignore it; callers of
    /// [`list_doctors`](Self::list_doctors) are protected either way. Fails with
    /// `SourceUnavailable` when the source cannot be read or parsed.
    async fn fetch_records(&self, hospital_filter: Option<&str>) -> Result<Vec<DoctorRecord>>;

    /// Doctors with freshly computed pending-task counts, in source order
    async fn list_doctors(&self, hospital_filter: Option<&str>) -> Result<Vec<Doctor>> {
        let records = self.fetch_records(hospital_filter).await?;
        let doctors = candidates_from_records(&records, hospital_filter);

        debug!(
            source = self.source_name(),
            hospital_filter = hospital_filter,
            records = records.len(),
            doctors = doctors.len(),
            "Listed doctors from directory"
        );

        Ok(doctors)
    }

    /// One doctor with their full task list
    async fn get_doctor(&self, doctor_id: &str) -> Result<DoctorRecord> {
        self.fetch_records(None)
            .await?
            .into_iter()
            .find(|record| record.id == doctor_id)
            .ok_or_else(|| AssignmentError::DoctorNotFound {
                doctor_id: doctor_id.to_string(),
            })
    }

    /// Distinct hospitals of the roster, in order of first appearance
    async fn list_hospitals(&self) -> Result<Vec<Hospital>> {
        let records = self.fetch_records(None).await?;
        Ok(hospitals_from_records(&records))
    }
}

/// Exact-match hospital filter plus pending-count derivation
pub fn candidates_from_records(
    records: &[DoctorRecord],
    hospital_filter: Option<&str>,
) -> Vec<Doctor> {
    records
        .iter()
        .filter(|record| hospital_filter.is_none_or(|id| record.hospital_id == id))
        .map(DoctorRecord::to_doctor)
        .collect()
}

pub fn hospitals_from_records(records: &[DoctorRecord]) -> Vec<Hospital> {
    let mut hospitals: Vec<Hospital> = Vec::new();
    for record in records {
        if !hospitals.iter().any(|h| h.id == record.hospital_id) {
            hospitals.push(Hospital {
                id: record.hospital_id.clone(),
                name: record.hospital_name.clone(),
            });
        }
    }
    hospitals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskRecord, TaskStatus};

    fn record(id: &str, hospital: &str, statuses: &[TaskStatus]) -> DoctorRecord {
        DoctorRecord {
            id: id.to_string(),
            name: format!("Dr. {id}"),
            hospital_id: hospital.to_string(),
            hospital_name: format!("{hospital} name"),
            tasks: statuses
                .iter()
                .enumerate()
                .map(|(i, status)| TaskRecord {
                    id: format!("{id}-t{i}"),
                    status: *status,
                })
                .collect(),
        }
    }

    #[test]
    fn filter_uses_exact_hospital_match() {
        let records = vec![
            record("doctor001", "hospital001", &[]),
            record("doctor002", "hospital0011", &[]),
            record("doctor003", "hospital001", &[]),
        ];

        let ids: Vec<_> = candidates_from_records(&records, Some("hospital001"))
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["doctor001", "doctor003"]);
    }

    #[test]
    fn no_filter_keeps_source_order() {
        let records = vec![
            record("doctor003", "h2", &[TaskStatus::Unreviewed]),
            record("doctor001", "h1", &[TaskStatus::Reviewed]),
        ];

        let doctors = candidates_from_records(&records, None);
        assert_eq!(doctors[0].id, "doctor003");
        assert_eq!(doctors[0].pending_task_count, 1);
        assert_eq!(doctors[1].pending_task_count, 0);
    }

    #[test]
    fn hospitals_are_deduplicated_in_first_seen_order() {
        let records = vec![
            record("doctor001", "h2", &[]),
            record("doctor002", "h1", &[]),
            record("doctor003", "h2", &[]),
        ];

        let ids: Vec<_> = hospitals_from_records(&records)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["h2", "h1"]);
    }
}
