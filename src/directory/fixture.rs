//! Fixture-backed directory
//!
//! Reads a JSON file shaped like the platform's doctor list response
//! (`{"data": [...]}`) on every call, so edits to the file show up on the next read.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use super::DoctorDirectory;
use crate::error::{AssignmentError, Result};
use crate::models::DoctorRecord;

const SOURCE_NAME: &str = "fixture";

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    data: Vec<DoctorRecord>,
}

#[derive(Debug, Clone)]
pub struct FixtureDirectory {
    path: PathBuf,
}

impl FixtureDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_fixture(&self) -> Result<Vec<DoctorRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to read doctor fixture");
            AssignmentError::source_unavailable(
                SOURCE_NAME,
                format!("cannot read {}: {e}", self.path.display()),
            )
        })?;

        let fixture: FixtureFile = serde_json::from_str(&content).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to parse doctor fixture");
            AssignmentError::source_unavailable(
                SOURCE_NAME,
                format!("cannot parse {}: {e}", self.path.display()),
            )
        })?;

        Ok(fixture.data)
    }
}

#[async_trait]
impl DoctorDirectory for FixtureDirectory {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_records(&self, hospital_filter: Option<&str>) -> Result<Vec<DoctorRecord>> {
        let mut records = self.read_fixture().await?;
        if let Some(hospital_id) = hospital_filter {
            records.retain(|record| record.hospital_id == hospital_id);
        }

        debug!(
            path = %self.path.display(),
            hospital_filter = hospital_filter,
            count = records.len(),
            "Read doctors from fixture"
        );

        Ok(records)
    }
}
