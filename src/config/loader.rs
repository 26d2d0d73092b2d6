//! Configuration Loader
//!
//! Environment-aware layered loading built on the `config` crate. Layers, lowest to
//! highest precedence:
//!
//! 1. `<config_dir>/triage-assignment.yaml` (required)
//! 2. `<config_dir>/triage-assignment.<environment>.yaml` (optional)
//! 3. `TRIAGE_ASSIGNMENT__<SECTION>__<KEY>` environment variables
//! 4. `APPROVAL_PLATFORM_BASE_URL` / `APPROVAL_PLATFORM_API_KEY`

use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::error::{ConfigResult, ConfigurationError};
use super::AssignmentConfig;
use crate::constants::{self, CONFIG_FILE_STEM, DEFAULT_ENVIRONMENT};

/// Loaded, validated configuration plus where it came from
#[derive(Debug)]
pub struct ConfigManager {
    config: AssignmentConfig,
    environment: String,
    config_directory: PathBuf,
    /// Anchor for relative paths inside the configuration
    project_root: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<Arc<ConfigManager>> {
        let environment = detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    /// This is useful for testing without modifying global environment variables
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let environment = environment.trim().to_lowercase();
        let environment = environment.as_str();
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let config_file = Self::find_config_file(&config_directory)?;
        let mut config = Self::load_layers(&config_file, &config_directory, environment)?;

        let project_root = Self::determine_project_root(&config_directory);
        config.resolve_paths(&project_root);
        config.validate()?;

        debug!(
            "Configuration loaded: {}",
            Self::sanitize_config_for_logging(&config)
        );

        info!(
            environment = environment,
            strategy = %config.strategy,
            source = config.directory.source_name(),
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
            project_root,
        }))
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Configuration as JSON with credentials masked, safe to print or log
    pub fn debug_config(&self) -> serde_json::Value {
        Self::sanitize_config_for_logging(&self.config)
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn load_layers(
        config_file: &Path,
        config_directory: &Path,
        environment: &str,
    ) -> ConfigResult<AssignmentConfig> {
        let override_file = config_directory.join(format!("{CONFIG_FILE_STEM}.{environment}.yaml"));
        if override_file.exists() {
            debug!(
                "Applying environment-specific overrides from: {}",
                override_file.display()
            );
        }

        let layered = || -> Result<AssignmentConfig, config::ConfigError> {
            let mut merged = Config::builder()
                .add_source(File::from(config_file))
                .add_source(File::from(override_file.as_path()).required(false))
                .add_source(
                    Environment::with_prefix(constants::env::CONFIG_PREFIX)
                        .prefix_separator("__")
                        .separator("__")
                        .try_parsing(true),
                )
                .build()?;

            // Platform variables only apply when the platform source is selected
            if merged.get_string("directory.source").ok().as_deref() == Some("platform") {
                merged = Config::builder()
                    .add_source(merged)
                    .set_override_option(
                        "directory.base_url",
                        env::var(constants::env::PLATFORM_BASE_URL).ok(),
                    )?
                    .set_override_option(
                        "directory.api_key",
                        env::var(constants::env::PLATFORM_API_KEY).ok(),
                    )?
                    .build()?;
            }

            merged.try_deserialize::<AssignmentConfig>()
        };

        layered().map_err(|e| ConfigurationError::load_error(environment, e))
    }

    fn default_config_directory() -> PathBuf {
        env::var(constants::env::CONFIG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }

    fn find_config_file(config_directory: &Path) -> ConfigResult<PathBuf> {
        let mut searched_paths = Vec::new();

        for extension in ["yaml", "yml"] {
            let config_path = config_directory.join(format!("{CONFIG_FILE_STEM}.{extension}"));
            if config_path.is_file() {
                debug!("Found configuration file: {}", config_path.display());
                return Ok(config_path);
            }
            searched_paths.push(config_path);
        }

        Err(ConfigurationError::config_file_not_found(searched_paths))
    }

    /// The configuration directory is expected at `<project_root>/config`
    fn determine_project_root(config_directory: &Path) -> PathBuf {
        config_directory
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config_directory.to_path_buf())
    }

    fn sanitize_config_for_logging(config: &AssignmentConfig) -> serde_json::Value {
        let mut rendered = serde_json::to_value(config).unwrap_or(serde_json::Value::Null);
        mask_credentials(&mut rendered);
        rendered
    }
}

const CREDENTIAL_MARKERS: [&str; 5] = ["password", "secret", "key", "token", "credential"];

fn is_credential_field(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    CREDENTIAL_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Replace every non-null credential-looking field with `[MASKED]`
fn mask_credentials(value: &mut serde_json::Value) {
    let mut pending = vec![value];
    while let Some(node) = pending.pop() {
        match node {
            serde_json::Value::Object(fields) => {
                for (name, field) in fields.iter_mut() {
                    if field.is_null() {
                        continue;
                    }
                    if is_credential_field(name) {
                        *field = serde_json::Value::from("[MASKED]");
                    } else {
                        pending.push(field);
                    }
                }
            }
            serde_json::Value::Array(items) => pending.extend(items.iter_mut()),
            _ => {}
        }
    }
}

/// Detect current environment: TRIAGE_ENV || APP_ENV || 'development'
pub fn detect_environment() -> String {
    env::var(constants::env::ENVIRONMENT)
        .or_else(|_| env::var(constants::env::APP_ENVIRONMENT))
        .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectoryConfig;
    use crate::directory::PlatformDirectoryConfig;
    use crate::strategies::StrategyKind;

    #[test]
    fn sanitizer_masks_api_key() {
        let config = AssignmentConfig {
            strategy: StrategyKind::LoadBalance,
            directory: DirectoryConfig::Platform(PlatformDirectoryConfig {
                api_key: Some("super-secret".to_string()),
                ..Default::default()
            }),
        };

        let rendered = ConfigManager::sanitize_config_for_logging(&config).to_string();
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[MASKED]"));
        assert!(rendered.contains("http://localhost:5003"));
    }

    #[test]
    fn masking_reaches_nested_arrays_and_skips_nulls() {
        let mut value = serde_json::json!({
            "api_key": null,
            "upstreams": [{"name": "primary", "auth_token": "t-1"}]
        });
        mask_credentials(&mut value);
        assert!(value["api_key"].is_null());
        assert_eq!(value["upstreams"][0]["auth_token"], "[MASKED]");
        assert_eq!(value["upstreams"][0]["name"], "primary");
    }

    #[test]
    fn project_root_is_parent_of_config_dir() {
        assert_eq!(
            ConfigManager::determine_project_root(Path::new("/srv/triage/config")),
            PathBuf::from("/srv/triage")
        );
    }
}
