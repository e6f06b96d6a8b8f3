//! # SoulSync Core Library
//!
//! Core reminder engine for the SoulSync daily-routine tracker. The
//! surrounding application owns the task list, persistence, and all
//! rendering; this crate owns the timing-correctness concerns:
//!
//! - **Fire-time resolution**: turning a task's daily time-of-day into the
//!   next strictly-future firing instant
//! - **Reconciliation**: keeping the platform's pending-alarm set in lockstep
//!   with the current task list via full cancel-then-resubmit passes
//! - **Proximity classification**: per-tick upcoming/active/past status for
//!   ambient pulsing, with at-most-once-per-minute transient alerts
//! - **Hydration nudges**: a single recurring water reminder while the daily
//!   intake is below goal
//!
//! The platform's alarm facility sits behind the [`AlarmGateway`] trait; the
//! host implements it once per platform and the core never touches the OS
//! directly.
//!
//! ## Key Components
//!
//! - [`ReminderScheduler`]: cancel-all-then-resubmit reconciliation passes
//! - [`AlertGuard`]: tick-driven proximity snapshots and one-shot alerts
//! - [`next_fire_instant`]: pure fire-time resolution
//! - [`classify`]: pure time-proximity classification

pub mod alert;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ids;
pub mod proximity;
pub mod resolver;
pub mod scheduler;
pub mod task;

pub use alert::{AlertGuard, TaskSnapshot, TransientAlert};
pub use config::{Config, HydrationConfig, NotificationsConfig};
pub use error::{ConfigError, CoreError, GatewayError, Result, ValidationError};
pub use gateway::{AlarmGateway, AlarmRequest, HapticIntensity};
pub use ids::{AlarmIdArena, HYDRATION_ALARM_ID};
pub use proximity::{classify, Proximity, TimeStatus, PULSE_WINDOW_MIN};
pub use resolver::next_fire_instant;
pub use scheduler::{InitState, ReconcileSummary, ReminderScheduler, HYDRATION_GOAL_LITERS};
pub use task::{default_routine, Task, TaskCategory, TimeOfDay};
