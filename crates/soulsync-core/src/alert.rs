//! Transient alert emission.
//!
//! The UI drives a ~1 Hz tick; each tick re-evaluates every task's proximity.
//! Without a guard, an exact-match minute would emit ~60 alerts. `AlertGuard`
//! remembers, per task, the last minute-of-day it alerted for and suppresses
//! re-emission until the observed minute moves on. Like the timer engine in
//! a caller-driven loop, this owns no threads -- the host calls `tick()`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::proximity::{classify, TimeStatus};
use crate::task::Task;

/// A one-shot in-app alert for a task whose minute just matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransientAlert {
    pub task_id: String,
    pub title: String,
    pub body: String,
    pub at: DateTime<Utc>,
}

/// Per-task, per-tick evaluation result for the UI.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    pub task_id: String,
    pub status: TimeStatus,
    /// Ambient pulse: inside the active window and not completed.
    pub pulse: bool,
    pub exact_match: bool,
    /// Present on at most one tick per contiguous exact-match minute.
    pub alert: Option<TransientAlert>,
}

/// Suppresses duplicate exact-time alerts within one minute.
#[derive(Debug, Default)]
pub struct AlertGuard {
    /// Task id -> minute-of-day an alert was last emitted for.
    last_emitted: HashMap<String, u32>,
}

impl AlertGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every task against `now`, emitting at most one alert per
    /// task per contiguous exact-match minute. Tasks are independent; order
    /// of the returned snapshots follows the input.
    pub fn tick(&mut self, tasks: &[Task], now: DateTime<Utc>) -> Vec<TaskSnapshot> {
        tasks.iter().map(|task| self.evaluate(task, now)).collect()
    }

    /// Evaluate a single task for this tick.
    pub fn evaluate(&mut self, task: &Task, now: DateTime<Utc>) -> TaskSnapshot {
        let proximity = classify(task.time, now);
        let now_min = now.hour() * 60 + now.minute();
        let alert = if self.should_emit(&task.id, now_min, proximity.exact_match, task.completed) {
            Some(TransientAlert {
                task_id: task.id.clone(),
                title: format!("\u{23F0} Time for {}!", task.name),
                body: task.message.clone(),
                at: now,
            })
        } else {
            None
        };
        TaskSnapshot {
            task_id: task.id.clone(),
            status: proximity.status,
            pulse: proximity.status == TimeStatus::Active && !task.completed,
            exact_match: proximity.exact_match,
            alert,
        }
    }

    fn should_emit(&mut self, task_id: &str, now_min: u32, exact: bool, completed: bool) -> bool {
        if !exact || completed {
            // Re-arm the moment the observed minute moves off the recorded one.
            if self.last_emitted.get(task_id).is_some_and(|&m| m != now_min) {
                self.last_emitted.remove(task_id);
            }
            return false;
        }
        match self.last_emitted.get(task_id) {
            Some(&m) if m == now_min => false,
            _ => {
                self.last_emitted.insert(task_id.to_string(), now_min);
                true
            }
        }
    }

    /// Forget all emission markers (e.g. when the task list is replaced).
    pub fn reset(&mut self) {
        self.last_emitted.clear();
    }
}
