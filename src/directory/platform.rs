//! # Approval Platform Directory
//!
//! Reads the doctor roster from the live approval platform's open API. Every call is a
//! fresh request; the platform is the source of truth for task statuses.
//!
//! All endpoints are `POST` with a JSON body and answer with the envelope
//! `{"success": bool, "data": [...], "message": "..."}`. Transport failures, non-2xx
//! responses, unparseable bodies and `success: false` all surface as
//! `SourceUnavailable`. Retrying is left to the caller.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::DoctorDirectory;
use crate::config::ConfigurationError;
use crate::constants::platform;
use crate::error::{AssignmentError, Result};
use crate::models::{DoctorRecord, Hospital};
use crate::utils::serde::{deserialize_optional_text, deserialize_text};

const SOURCE_NAME: &str = "approval_platform";

/// Connection settings for the approval platform
#[derive(Clone, Serialize, Deserialize)]
pub struct PlatformDirectoryConfig {
    /// Base URL of the platform (e.g. `http://localhost:5003`)
    #[serde(deserialize_with = "deserialize_text")]
    pub base_url: String,
    /// Sent as the `Token` header when present and non-empty
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    platform::DEFAULT_TIMEOUT_MS
}

impl PlatformDirectoryConfig {
    /// The key actually sent; an empty key sends no header
    pub fn token(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for PlatformDirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5003".to_string(),
            api_key: None,
            timeout_ms: platform::DEFAULT_TIMEOUT_MS,
        }
    }
}

impl std::fmt::Debug for PlatformDirectoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformDirectoryConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[MASKED]"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct PlatformEnvelope<T> {
    success: bool,
    data: Option<Vec<T>>,
    message: Option<String>,
}

/// Directory adapter over the approval platform HTTP API
#[derive(Clone)]
pub struct PlatformDirectory {
    client: Client,
    config: PlatformDirectoryConfig,
    base_url: String,
}

impl std::fmt::Debug for PlatformDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformDirectory")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .field("token_configured", &self.config.token().is_some())
            .finish()
    }
}

impl PlatformDirectory {
    /// Build the HTTP client.
    ///
    /// Fails when the base URL does not parse or the API key cannot be carried in a
    /// header. No request is made here.
    pub fn new(config: PlatformDirectoryConfig) -> std::result::Result<Self, ConfigurationError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| {
            ConfigurationError::invalid_value("directory.base_url", base_url.clone(), e.to_string())
        })?;

        let mut default_headers = HeaderMap::new();
        if let Some(api_key) = config.token() {
            let value = HeaderValue::from_str(api_key).map_err(|e| {
                ConfigurationError::invalid_value("directory.api_key", "[MASKED]", e.to_string())
            })?;
            let name = HeaderName::from_bytes(platform::TOKEN_HEADER.as_bytes()).map_err(|e| {
                ConfigurationError::validation_error(format!("token header: {e}"))
            })?;
            default_headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("triage-assignment/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ConfigurationError::validation_error(format!("HTTP client: {e}")))?;

        info!(
            base_url = %base_url,
            timeout_ms = config.timeout_ms,
            token_configured = config.token().is_some(),
            "Created approval platform directory"
        );

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: serde_json::Value,
    ) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, payload = %payload, "Calling approval platform");

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Approval platform request failed");
                AssignmentError::source_unavailable(SOURCE_NAME, format!("request to {path} failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = %status, body = %body, "Approval platform returned error status");
            return Err(AssignmentError::source_unavailable(
                SOURCE_NAME,
                format!("HTTP {status} from {path}: {body}"),
            ));
        }

        let envelope: PlatformEnvelope<T> = response.json().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to parse approval platform response");
            AssignmentError::source_unavailable(SOURCE_NAME, format!("invalid response from {path}: {e}"))
        })?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "unknown error".to_string());
            warn!(url = %url, message = %message, "Approval platform reported failure");
            return Err(AssignmentError::source_unavailable(SOURCE_NAME, message));
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

#[async_trait]
impl DoctorDirectory for PlatformDirectory {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_records(&self, hospital_filter: Option<&str>) -> Result<Vec<DoctorRecord>> {
        let payload = match hospital_filter {
            Some(hospital_id) => json!({ "hospitalId": hospital_id }),
            None => json!({}),
        };

        let records: Vec<DoctorRecord> = self.post(platform::DOCTOR_LIST_PATH, payload).await?;
        debug!(
            hospital_filter = hospital_filter,
            count = records.len(),
            "Fetched doctors from approval platform"
        );
        Ok(records)
    }

    async fn get_doctor(&self, doctor_id: &str) -> Result<DoctorRecord> {
        let records: Vec<DoctorRecord> = self
            .post(platform::DOCTOR_GET_PATH, json!({ "id": doctor_id }))
            .await?;

        records
            .into_iter()
            .next()
            .ok_or_else(|| AssignmentError::DoctorNotFound {
                doctor_id: doctor_id.to_string(),
            })
    }

    async fn list_hospitals(&self) -> Result<Vec<Hospital>> {
        let hospitals: Vec<Hospital> = self.post(platform::HOSPITAL_LIST_PATH, json!({})).await?;
        debug!(count = hospitals.len(), "Fetched hospitals from approval platform");
        Ok(hospitals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let config = PlatformDirectoryConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(PlatformDirectory::new(config).is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = PlatformDirectoryConfig {
            base_url: "http://platform.internal:5003/".to_string(),
            ..Default::default()
        };
        let directory = PlatformDirectory::new(config).unwrap();
        assert_eq!(directory.base_url(), "http://platform.internal:5003");
    }

    #[test]
    fn empty_api_key_is_not_a_configured_token() {
        let config = PlatformDirectoryConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.token().is_none());

        let directory = PlatformDirectory::new(config).unwrap();
        assert!(format!("{directory:?}").contains("token_configured: false"));
    }

    #[test]
    fn numeric_api_key_deserializes_as_text() {
        let config: PlatformDirectoryConfig = serde_json::from_value(serde_json::json!({
            "base_url": "http://localhost:5003",
            "api_key": 1234567890
        }))
        .unwrap();
        assert_eq!(config.token(), Some("1234567890"));
    }

    #[test]
    fn debug_output_masks_api_key() {
        let config = PlatformDirectoryConfig {
            api_key: Some("secret-token".to_string()),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[MASKED]"));
    }
}
