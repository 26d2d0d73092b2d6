//! # Assignment Configuration
//!
//! Which strategy the assigner runs and which backing source its doctor directory
//! reads. Both are resolved once at startup; nothing here is consulted per call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use triage_assignment::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let directory = manager.config().build_directory()?;
//! println!("strategy={} source={}", manager.config().strategy, directory.source_name());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::directory::{DoctorDirectory, FixtureDirectory, PlatformDirectory, PlatformDirectoryConfig};
use crate::strategies::StrategyKind;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure mirroring triage-assignment.yaml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssignmentConfig {
    /// Selection strategy used for every assignment
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Backing source of the doctor directory
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Backing source of the doctor directory, tagged by `source`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DirectoryConfig {
    /// Local JSON fixture, re-read on every call
    Fixture { path: PathBuf },
    /// Live approval platform API
    Platform(PlatformDirectoryConfig),
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig::Fixture {
            path: PathBuf::from("data/test_doctors.json"),
        }
    }
}

impl DirectoryConfig {
    pub fn source_name(&self) -> &'static str {
        match self {
            DirectoryConfig::Fixture { .. } => "fixture",
            DirectoryConfig::Platform(_) => "approval_platform",
        }
    }
}

impl AssignmentConfig {
    /// Reject values that would only fail later, at the first directory read
    pub fn validate(&self) -> ConfigResult<()> {
        match &self.directory {
            DirectoryConfig::Fixture { path } => {
                if path.as_os_str().is_empty() {
                    return Err(ConfigurationError::missing_required_field(
                        "directory.path",
                        "fixture directory",
                    ));
                }
            }
            DirectoryConfig::Platform(platform) => {
                if platform.base_url.trim().is_empty() {
                    return Err(ConfigurationError::missing_required_field(
                        "directory.base_url",
                        "platform directory",
                    ));
                }
                if platform.timeout_ms == 0 {
                    return Err(ConfigurationError::invalid_value(
                        "directory.timeout_ms",
                        "0",
                        "timeout must be greater than zero",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Anchor a relative fixture path at `project_root`
    pub fn resolve_paths(&mut self, project_root: &Path) {
        if let DirectoryConfig::Fixture { path } = &mut self.directory {
            if path.is_relative() {
                *path = project_root.join(&*path);
            }
        }
    }

    /// Build the configured directory adapter
    pub fn build_directory(&self) -> ConfigResult<Arc<dyn DoctorDirectory>> {
        let directory: Arc<dyn DoctorDirectory> = match &self.directory {
            DirectoryConfig::Fixture { path } => Arc::new(FixtureDirectory::new(path.clone())),
            DirectoryConfig::Platform(platform) => Arc::new(PlatformDirectory::new(platform.clone())?),
        };
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_load_balance_over_fixture() {
        let config = AssignmentConfig::default();
        assert_eq!(config.strategy, StrategyKind::LoadBalance);
        assert_eq!(config.directory.source_name(), "fixture");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn platform_requires_base_url_and_timeout() {
        let mut config = AssignmentConfig {
            strategy: StrategyKind::LoadBalance,
            directory: DirectoryConfig::Platform(PlatformDirectoryConfig {
                base_url: "  ".to_string(),
                ..Default::default()
            }),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingRequiredField { .. })
        ));

        config.directory = DirectoryConfig::Platform(PlatformDirectoryConfig {
            timeout_ms: 0,
            ..Default::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn relative_fixture_path_is_anchored() {
        let mut config = AssignmentConfig::default();
        config.resolve_paths(Path::new("/srv/triage"));
        match config.directory {
            DirectoryConfig::Fixture { path } => {
                assert_eq!(path, PathBuf::from("/srv/triage/data/test_doctors.json"))
            }
            other => panic!("unexpected directory config {other:?}"),
        }
    }

    #[test]
    fn directory_source_is_tagged() {
        let config: AssignmentConfig = serde_json::from_value(serde_json::json!({
            "strategy": "load_balance",
            "directory": {"source": "platform", "base_url": "http://platform:5003"}
        }))
        .unwrap();

        match config.directory {
            DirectoryConfig::Platform(platform) => {
                assert_eq!(platform.base_url, "http://platform:5003");
                assert_eq!(platform.timeout_ms, 30_000);
                assert!(platform.api_key.is_none());
            }
            other => panic!("unexpected directory config {other:?}"),
        }
    }
}
