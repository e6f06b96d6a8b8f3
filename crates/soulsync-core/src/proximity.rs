//! Time-proximity classification.
//!
//! Pure minute-granularity comparison between a task's time-of-day and the
//! current time, run once per UI tick per task. Drives the "NOW" badge, the
//! ambient pulse, and the exact-match trigger for transient alerts.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TimeOfDay;

/// Half-width of the active window in minutes (inclusive on both sides).
pub const PULSE_WINDOW_MIN: u32 = 5;

/// Where a task sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStatus {
    Upcoming,
    Active,
    Past,
}

/// Classification result for one task on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proximity {
    pub status: TimeStatus,
    /// The current minute equals the task's minute. Narrower than the
    /// active window; triggers the one-shot transient alert.
    pub exact_match: bool,
}

/// Classify a task time against the current instant.
///
/// The active window takes precedence over upcoming, so a task five minutes
/// out already reads as active. Proximity is evaluated within the current
/// calendar day's minute values only; times near midnight do not wrap.
pub fn classify(task_time: TimeOfDay, now: DateTime<Utc>) -> Proximity {
    let now_min = now.hour() * 60 + now.minute();
    classify_minutes(task_time.minutes_since_midnight(), now_min)
}

fn classify_minutes(task_min: u32, now_min: u32) -> Proximity {
    let distance = now_min.abs_diff(task_min);
    let status = if distance <= PULSE_WINDOW_MIN {
        TimeStatus::Active
    } else if now_min < task_min {
        TimeStatus::Upcoming
    } else {
        TimeStatus::Past
    };
    Proximity {
        status,
        exact_match: distance == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, h, m, 30).unwrap()
    }

    fn one_pm() -> TimeOfDay {
        "13:00".parse().unwrap()
    }

    #[test]
    fn well_before_is_upcoming() {
        let p = classify(one_pm(), now(12, 30));
        assert_eq!(p.status, TimeStatus::Upcoming);
        assert!(!p.exact_match);
    }

    #[test]
    fn four_minutes_early_is_active() {
        let p = classify(one_pm(), now(12, 56));
        assert_eq!(p.status, TimeStatus::Active);
        assert!(!p.exact_match);
    }

    #[test]
    fn exact_minute_is_active_and_exact() {
        let p = classify(one_pm(), now(13, 0));
        assert_eq!(p.status, TimeStatus::Active);
        assert!(p.exact_match);
    }

    #[test]
    fn window_is_inclusive_on_both_edges() {
        assert_eq!(classify(one_pm(), now(12, 55)).status, TimeStatus::Active);
        assert_eq!(classify(one_pm(), now(13, 5)).status, TimeStatus::Active);
        assert_eq!(classify(one_pm(), now(12, 54)).status, TimeStatus::Upcoming);
        assert_eq!(classify(one_pm(), now(13, 6)).status, TimeStatus::Past);
    }

    #[test]
    fn seven_minutes_late_is_past() {
        let p = classify(one_pm(), now(13, 7));
        assert_eq!(p.status, TimeStatus::Past);
        assert!(!p.exact_match);
    }

    #[test]
    fn seconds_do_not_affect_exact_match() {
        // now() fixes seconds at 30; still an exact minute match.
        assert!(classify(one_pm(), now(13, 0)).exact_match);
    }

    #[test]
    fn no_wrap_across_midnight() {
        // 23:58 against a 00:02 task: plain minute distance, reads as past.
        let p = classify("00:02".parse().unwrap(), now(23, 58));
        assert_eq!(p.status, TimeStatus::Past);
    }
}
