//! Reminder reconciliation scheduler.
//!
//! Owns the invariant that the gateway's pending-alarm set mirrors the
//! current non-completed task list plus at most one hydration reminder.
//! Every pass is a full reset: cancel everything, then resubmit everything.
//! Task lists stay small (a couple dozen entries at most), so recomputing
//! from scratch avoids the drift bugs of incremental diffing.
//!
//! Reconciliation runs on state-change events, not on the UI tick, and is
//! not re-entrant-safe against itself: overlapping passes may interleave at
//! the gateway, which converges once the last pass's calls settle.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::gateway::{AlarmGateway, AlarmRequest, HapticIntensity};
use crate::ids::{AlarmIdArena, HYDRATION_ALARM_ID};
use crate::resolver::next_fire_instant;
use crate::task::Task;

/// Daily hydration goal in liters.
pub const HYDRATION_GOAL_LITERS: f64 = 4.0;

/// Permission/initialization state of the scheduler.
///
/// Permission is requested lazily on the first scheduling pass. A denial
/// sticks until [`ReminderScheduler::reset_initialization`] is called, when
/// the user re-enables notifications in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitState {
    Uninitialized,
    Ready,
    Denied,
}

/// Summary of one reconciliation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileSummary {
    /// Alarms accepted by the gateway.
    pub scheduled: usize,
    /// Submissions the platform rejected (logged, not fatal).
    pub failed: usize,
    /// Completed tasks excluded from scheduling.
    pub skipped_completed: usize,
    /// Whether the hydration reminder was submitted.
    pub hydration_scheduled: bool,
    /// Pass ran with notifications disabled: pending set was emptied.
    pub disabled: bool,
    /// Pass was skipped because permission is denied.
    pub permission_denied: bool,
}

/// Keeps the platform's pending alarms in sync with the task list.
pub struct ReminderScheduler {
    gateway: Arc<dyn AlarmGateway>,
    ids: AlarmIdArena,
    init: InitState,
    config: Config,
}

impl ReminderScheduler {
    /// Create a scheduler with default configuration.
    pub fn new(gateway: Arc<dyn AlarmGateway>) -> Self {
        Self::with_config(gateway, Config::default())
    }

    pub fn with_config(gateway: Arc<dyn AlarmGateway>, config: Config) -> Self {
        Self {
            gateway,
            ids: AlarmIdArena::new(),
            init: InitState::Uninitialized,
            config,
        }
    }

    pub fn init_state(&self) -> InitState {
        self.init
    }

    /// Forget a permission denial so the next pass re-prompts.
    pub fn reset_initialization(&mut self) {
        self.init = InitState::Uninitialized;
    }

    /// Make the gateway's pending set match `tasks` (plus hydration).
    ///
    /// Invoked by the host on every relevant state change: task edits,
    /// completion toggles, hydration intake, or the enabled flag flipping.
    /// Cancellation always precedes submission within a pass, and one failed
    /// submission never suppresses the remaining ones.
    pub async fn reconcile(
        &mut self,
        tasks: &[Task],
        hydration_liters: f64,
        hydration_goal: f64,
        enabled: bool,
    ) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();

        if !enabled {
            summary.disabled = true;
            self.cancel_all_logged().await;
            return summary;
        }

        if !self.ensure_initialized().await {
            summary.permission_denied = true;
            return summary;
        }

        self.cancel_all_logged().await;

        let now = Utc::now();
        for task in tasks {
            if task.completed {
                summary.skipped_completed += 1;
                continue;
            }
            let id = self.ids.alarm_id(&task.id);
            match self.gateway.schedule(self.task_request(id, task, now)).await {
                Ok(()) => summary.scheduled += 1,
                Err(e) => {
                    warn!(task = %task.id, alarm = id, error = %e, "alarm submission failed");
                    summary.failed += 1;
                }
            }
        }

        if hydration_liters < hydration_goal {
            match self.gateway.schedule(self.hydration_request(now)).await {
                Ok(()) => summary.hydration_scheduled = true,
                Err(e) => {
                    warn!(alarm = HYDRATION_ALARM_ID, error = %e, "hydration submission failed");
                    summary.failed += 1;
                }
            }
        }

        debug!(
            scheduled = summary.scheduled,
            failed = summary.failed,
            hydration = summary.hydration_scheduled,
            "reconciliation pass complete"
        );
        summary
    }

    /// One-shot reminder at an arbitrary instant (not part of the routine).
    pub async fn schedule_custom_reminder(
        &mut self,
        title: &str,
        body: &str,
        at: DateTime<Utc>,
    ) -> Result<u32> {
        if !self.ensure_initialized().await {
            return Err(GatewayError::PermissionDenied.into());
        }
        let id = self.ids.allocate();
        let mut request = AlarmRequest::new(id, title, body, at);
        request.vibrate = self.config.notifications.vibration;
        self.gateway.schedule(request).await?;
        Ok(id)
    }

    /// Fire-and-forget haptic passthrough; failures are logged, not surfaced.
    pub async fn trigger_haptic(&self, intensity: HapticIntensity) {
        if let Err(e) = self.gateway.haptic_pulse(intensity).await {
            debug!(error = %e, "haptic pulse failed");
        }
    }

    async fn ensure_initialized(&mut self) -> bool {
        match self.init {
            InitState::Ready => true,
            InitState::Denied => false,
            InitState::Uninitialized => match self.gateway.request_permission().await {
                Ok(true) => {
                    self.init = InitState::Ready;
                    true
                }
                Ok(false) => {
                    warn!("notification permission denied; scheduling disabled until re-enabled");
                    self.init = InitState::Denied;
                    false
                }
                Err(e) => {
                    // Transient gateway failure: stay uninitialized so a
                    // later pass retries the prompt.
                    warn!(error = %e, "permission request failed");
                    false
                }
            },
        }
    }

    fn task_request(&self, id: u32, task: &Task, now: DateTime<Utc>) -> AlarmRequest {
        let mut request = AlarmRequest::new(
            id,
            format!("\u{23F0} Time for {}!", task.name),
            task.message.clone(),
            next_fire_instant(task.time, now),
        )
        .repeating();
        request.vibrate = self.config.notifications.vibration;
        if let Some(sound) = &self.config.notifications.custom_sound {
            request = request.with_sound(sound.clone());
        }
        request
    }

    fn hydration_request(&self, now: DateTime<Utc>) -> AlarmRequest {
        let interval = Duration::minutes(self.config.hydration.reminder_interval_min as i64);
        let mut request = AlarmRequest::new(
            HYDRATION_ALARM_ID,
            "\u{1F4A7} Hydration Time!",
            "Remember to drink water - your body needs it!",
            now + interval,
        )
        .repeating();
        request.vibrate = self.config.notifications.vibration;
        request
    }

    async fn cancel_all_logged(&self) {
        if let Err(e) = self.gateway.cancel_all().await {
            warn!(error = %e, "failed to cancel pending alarms");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway stub that counts permission prompts and answers with a
    /// canned grant/deny.
    struct PermissionGateway {
        grant: bool,
        prompts: AtomicUsize,
    }

    impl PermissionGateway {
        fn new(grant: bool) -> Arc<Self> {
            Arc::new(Self {
                grant,
                prompts: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AlarmGateway for PermissionGateway {
        async fn request_permission(&self) -> Result<bool, GatewayError> {
            self.prompts.fetch_add(1, Ordering::SeqCst);
            Ok(self.grant)
        }
        async fn schedule(&self, _request: AlarmRequest) -> Result<(), GatewayError> {
            Ok(())
        }
        async fn cancel(&self, _id: u32) -> Result<(), GatewayError> {
            Ok(())
        }
        async fn cancel_all(&self) -> Result<(), GatewayError> {
            Ok(())
        }
        async fn pending_ids(&self) -> Result<Vec<u32>, GatewayError> {
            Ok(Vec::new())
        }
    }

    fn routine() -> Vec<Task> {
        crate::task::default_routine()
    }

    #[tokio::test]
    async fn permission_is_requested_once_and_cached() {
        let gateway = PermissionGateway::new(true);
        let mut scheduler = ReminderScheduler::new(gateway.clone());
        scheduler.reconcile(&routine(), 0.0, HYDRATION_GOAL_LITERS, true).await;
        scheduler.reconcile(&routine(), 0.0, HYDRATION_GOAL_LITERS, true).await;
        assert_eq!(gateway.prompts.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.init_state(), InitState::Ready);
    }

    #[tokio::test]
    async fn denial_sticks_until_reset() {
        let gateway = PermissionGateway::new(false);
        let mut scheduler = ReminderScheduler::new(gateway.clone());

        let summary = scheduler.reconcile(&routine(), 0.0, HYDRATION_GOAL_LITERS, true).await;
        assert!(summary.permission_denied);
        assert_eq!(summary.scheduled, 0);
        assert_eq!(scheduler.init_state(), InitState::Denied);

        // Denied passes do not re-prompt.
        scheduler.reconcile(&routine(), 0.0, HYDRATION_GOAL_LITERS, true).await;
        assert_eq!(gateway.prompts.load(Ordering::SeqCst), 1);

        // Reset re-prompts on the next pass.
        scheduler.reset_initialization();
        assert_eq!(scheduler.init_state(), InitState::Uninitialized);
        scheduler.reconcile(&routine(), 0.0, HYDRATION_GOAL_LITERS, true).await;
        assert_eq!(gateway.prompts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn disabled_pass_skips_permission_entirely() {
        let gateway = PermissionGateway::new(true);
        let mut scheduler = ReminderScheduler::new(gateway.clone());
        let summary = scheduler.reconcile(&routine(), 0.0, HYDRATION_GOAL_LITERS, false).await;
        assert!(summary.disabled);
        assert_eq!(gateway.prompts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn custom_reminder_requires_permission() {
        let gateway = PermissionGateway::new(false);
        let mut scheduler = ReminderScheduler::new(gateway);
        let err = scheduler
            .schedule_custom_reminder("Call mom", "Weekly check-in", Utc::now() + Duration::hours(1))
            .await;
        assert!(err.is_err());
    }
}
