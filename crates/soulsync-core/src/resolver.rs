//! Fire-time resolution.
//!
//! Maps a task's daily time-of-day to the next absolute instant at which that
//! wall-clock time occurs: today if it has not yet passed, otherwise
//! tomorrow. The result is always strictly in the future, so no alarm is
//! ever scheduled in the past.

use chrono::{DateTime, TimeZone, Utc};

use crate::task::TimeOfDay;

/// Next instant at which `time` occurs strictly after `now`.
///
/// Overlays `time` (seconds zeroed) on `now`'s calendar date; if the
/// candidate is at or before `now`, advances by one calendar day. Date
/// arithmetic, not a fixed 24 h offset, so any calendar anomalies are the
/// host calendar's problem.
pub fn next_fire_instant(time: TimeOfDay, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let mut candidate = today.and_time(time.as_naive_time());
    if candidate <= now.naive_utc() {
        candidate = today.succ_opt().unwrap_or(today).and_time(time.as_naive_time());
    }
    Utc.from_utc_datetime(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};
    use proptest::prelude::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, h, m, s).unwrap()
    }

    fn five_am() -> TimeOfDay {
        "05:00".parse().unwrap()
    }

    #[test]
    fn before_the_time_schedules_today() {
        let fire = next_fire_instant(five_am(), at(4, 59, 59));
        assert_eq!(fire, at(5, 0, 0));
    }

    #[test]
    fn exactly_at_the_time_schedules_tomorrow() {
        let fire = next_fire_instant(five_am(), at(5, 0, 0));
        assert_eq!(fire, at(5, 0, 0) + Duration::days(1));
    }

    #[test]
    fn just_past_the_time_schedules_tomorrow() {
        let fire = next_fire_instant(five_am(), at(5, 0, 1));
        assert_eq!(fire, at(5, 0, 0) + Duration::days(1));
    }

    #[test]
    fn seconds_are_zeroed() {
        let fire = next_fire_instant("13:30".parse().unwrap(), at(9, 12, 47));
        assert_eq!(fire.second(), 0);
        assert_eq!(fire.nanosecond(), 0);
    }

    #[test]
    fn midnight_task_late_in_the_day_rolls_over() {
        let fire = next_fire_instant("00:00".parse().unwrap(), at(23, 59, 0));
        assert_eq!(fire, at(0, 0, 0) + Duration::days(1));
    }

    proptest! {
        #[test]
        fn always_strictly_future_with_matching_wall_clock(
            th in 0u8..24, tm in 0u8..60,
            nh in 0u32..24, nm in 0u32..60, ns in 0u32..60,
        ) {
            let time = TimeOfDay::new(th, tm).unwrap();
            let now = at(nh, nm, ns);
            let fire = next_fire_instant(time, now);
            prop_assert!(fire > now);
            prop_assert!(fire - now <= Duration::days(1));
            prop_assert_eq!(fire.hour(), th as u32);
            prop_assert_eq!(fire.minute(), tm as u32);
        }
    }
}
