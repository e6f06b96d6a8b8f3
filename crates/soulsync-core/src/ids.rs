//! Stable numeric alarm ids.
//!
//! The platform addresses alarms by integer, but tasks carry opaque string
//! ids. Instead of coercing the string to a number (which collides or fails
//! for non-numeric ids), the arena assigns each task id a small integer once
//! and returns the same integer for the task's whole lifetime.

use std::collections::HashMap;

/// Reserved id for the single hydration reminder.
pub const HYDRATION_ALARM_ID: u32 = 9999;

const FIRST_ALARM_ID: u32 = 1;

/// Maps task-id strings to stably assigned alarm ids.
#[derive(Debug, Clone)]
pub struct AlarmIdArena {
    by_task: HashMap<String, u32>,
    next: u32,
}

impl AlarmIdArena {
    pub fn new() -> Self {
        Self {
            by_task: HashMap::new(),
            next: FIRST_ALARM_ID,
        }
    }

    /// Alarm id for a task, assigning one on first sight.
    pub fn alarm_id(&mut self, task_id: &str) -> u32 {
        if let Some(&id) = self.by_task.get(task_id) {
            return id;
        }
        let id = self.allocate();
        self.by_task.insert(task_id.to_string(), id);
        id
    }

    /// Allocate a fresh id outside the task mapping (custom reminders).
    pub fn allocate(&mut self) -> u32 {
        if self.next == HYDRATION_ALARM_ID {
            self.next += 1;
        }
        let id = self.next;
        self.next += 1;
        id
    }

    /// Look up without assigning.
    pub fn get(&self, task_id: &str) -> Option<u32> {
        self.by_task.get(task_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_task.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_task.is_empty()
    }
}

impl Default for AlarmIdArena {
    fn default() -> Self {
        Self::new()
    }
}
