//! Core error types for soulsync-core.
//!
//! This module defines the error hierarchy using thiserror. No error in this
//! crate is fatal to the surrounding application: scheduling failures degrade
//! to "no reminder fires for that item".

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for soulsync-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Alarm gateway errors
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors reported by the platform alarm gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The user denied the notification permission prompt.
    #[error("Notification permission denied")]
    PermissionDenied,

    /// The platform rejected a specific alarm request.
    #[error("Alarm {id} rejected by platform: {message}")]
    ScheduleRejected { id: u32, message: String },

    /// A cancel request failed; the stale alarm persists until the next
    /// successful reconciliation overwrites it.
    #[error("Failed to cancel alarm {id}: {message}")]
    CancelFailed { id: u32, message: String },

    /// The gateway is unreachable or not yet bridged on this platform.
    #[error("Alarm gateway unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No config directory could be resolved on this platform
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Time-of-day out of range or malformed
    #[error("Invalid time of day '{input}': {message}")]
    InvalidTimeOfDay { input: String, message: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
