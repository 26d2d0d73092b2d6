//! # System Constants
//!
//! Names, codes and defaults shared between the directory adapters, the strategies
//! and the configuration layer.

/// Strategy names as they appear in configuration and in `AssignmentResult::strategy_used`
pub mod strategies {
    pub const LOAD_BALANCE: &str = "load_balance";
    pub const ROUND_ROBIN: &str = "round_robin";
    pub const SPECIALTY_MATCH: &str = "specialty_match";
}

/// Task status codes used by the approval platform
pub mod task_status_codes {
    pub const UNREVIEWED: u8 = 0;
    pub const REVIEWED: u8 = 1;
}

/// Approval platform endpoints, relative to the configured base URL
pub mod platform {
    pub const DOCTOR_LIST_PATH: &str = "/openapi/doctor/list";
    pub const DOCTOR_GET_PATH: &str = "/openapi/doctor/get";
    pub const HOSPITAL_LIST_PATH: &str = "/openapi/hospital/list";

    /// Header carrying the platform API key
    pub const TOKEN_HEADER: &str = "Token";

    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
}

/// Environment variables read by the configuration and logging layers
pub mod env {
    pub const ENVIRONMENT: &str = "TRIAGE_ENV";
    pub const APP_ENVIRONMENT: &str = "APP_ENV";
    pub const CONFIG_DIR: &str = "TRIAGE_ASSIGNMENT_CONFIG_DIR";
    pub const CONFIG_PREFIX: &str = "TRIAGE_ASSIGNMENT";
    pub const LOG_FORMAT: &str = "TRIAGE_LOG_FORMAT";
    pub const PLATFORM_BASE_URL: &str = "APPROVAL_PLATFORM_BASE_URL";
    pub const PLATFORM_API_KEY: &str = "APPROVAL_PLATFORM_API_KEY";
}

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const CONFIG_FILE_STEM: &str = "triage-assignment";
