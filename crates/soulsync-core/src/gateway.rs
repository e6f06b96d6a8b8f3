//! Alarm gateway contract.
//!
//! The host platform implements this trait over whatever local-notification
//! facility it has; the core only ever talks to the trait. The gateway is
//! assumed to serialize its own operations, so no locking is layered on top.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Haptic feedback intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

/// A pending-alarm request: one task reminder or the hydration nudge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmRequest {
    /// Numeric alarm id, unique within the gateway's pending set.
    pub id: u32,
    pub title: String,
    pub body: String,
    /// Absolute instant of the first (or only) firing.
    pub fire_at: DateTime<Utc>,
    /// Recur at the same wall-clock time every subsequent day.
    pub repeat_daily: bool,
    /// Platform sound name; `None` means the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    pub vibrate: bool,
}

impl AlarmRequest {
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>, fire_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            fire_at,
            repeat_daily: false,
            sound: None,
            vibrate: true,
        }
    }

    pub fn repeating(mut self) -> Self {
        self.repeat_daily = true;
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

/// Host-platform alarm facility.
///
/// All calls are asynchronous requests; the scheduler awaits each outcome but
/// treats failures as degraded service, never as fatal.
#[async_trait]
pub trait AlarmGateway: Send + Sync {
    /// Prompt for (or look up) the notification permission.
    async fn request_permission(&self) -> Result<bool, GatewayError>;

    /// Submit one alarm. Replaces any pending alarm with the same id.
    async fn schedule(&self, request: AlarmRequest) -> Result<(), GatewayError>;

    /// Cancel the pending alarm with this id, if any.
    async fn cancel(&self, id: u32) -> Result<(), GatewayError>;

    /// Cancel every pending alarm. Cancelling an empty set is a no-op.
    async fn cancel_all(&self) -> Result<(), GatewayError>;

    /// Ids of all currently pending alarms.
    async fn pending_ids(&self) -> Result<Vec<u32>, GatewayError>;

    /// Fire-and-forget haptic pulse.
    async fn haptic_pulse(&self, intensity: HapticIntensity) -> Result<(), GatewayError> {
        let _ = intensity;
        Ok(()) // default no-op for platforms without haptics
    }
}
