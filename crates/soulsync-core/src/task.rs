//! Routine task types.
//!
//! Tasks are owned by the surrounding application (the task store persists
//! and edits them); this crate only reads them to schedule reminders and to
//! classify time proximity.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a routine task, used by the UI for color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Spiritual,
    Health,
    Nutrition,
    Rest,
}

/// A wall-clock time of day with no date component.
///
/// Serialized as `"HH:MM"`, matching the stored task format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, validating hour and minute ranges.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::InvalidTimeOfDay {
                input: format!("{hour:02}:{minute:02}"),
                message: "hour must be 0-23 and minute 0-59".into(),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, 0..=1439.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Convert to a `NaiveTime` with seconds zeroed.
    pub fn as_naive_time(&self) -> NaiveTime {
        // Guaranteed in range by the constructor.
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0).unwrap_or_default()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ValidationError::InvalidTimeOfDay {
            input: s.to_string(),
            message: message.into(),
        };
        let (h, m) = s.split_once(':').ok_or_else(|| invalid("expected HH:MM"))?;
        let hour: u8 = h.parse().map_err(|_| invalid("hour is not a number"))?;
        let minute: u8 = m.parse().map_err(|_| invalid("minute is not a number"))?;
        Self::new(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A named, time-anchored routine item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub time: TimeOfDay,
    /// Optional display range, e.g. "06:00 - 08:00". No scheduling effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
    pub icon: String,
    pub category: TaskCategory,
    pub completed: bool,
    #[serde(default)]
    pub streak: u32,
    /// Motivational text carried into the alarm body.
    pub message: String,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        time: TimeOfDay,
        icon: impl Into<String>,
        category: TaskCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time,
            time_range: None,
            icon: icon.into(),
            category,
            completed: false,
            streak: 0,
            message: message.into(),
        }
    }

    pub fn with_time_range(mut self, range: impl Into<String>) -> Self {
        self.time_range = Some(range.into());
        self
    }
}

fn tod(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap_or(TimeOfDay { hour: 0, minute: 0 })
}

/// The stock seven-task day seeded on first launch.
pub fn default_routine() -> Vec<Task> {
    vec![
        Task::new(
            "1",
            "Fajr Namaz & Quran",
            tod(5, 0),
            "\u{1F54C}",
            TaskCategory::Spiritual,
            "Start your day with divine connection",
        ),
        Task::new(
            "2",
            "Gym/Workout",
            tod(6, 0),
            "\u{1F4AA}",
            TaskCategory::Health,
            "Your body is your temple - honor it",
        )
        .with_time_range("06:00 - 08:00"),
        Task::new(
            "3",
            "Breakfast",
            tod(8, 30),
            "\u{1F373}",
            TaskCategory::Nutrition,
            "Fuel your body for the day ahead",
        )
        .with_time_range("08:30 - 09:00"),
        Task::new(
            "4",
            "Zuhar Namaz & Lunch",
            tod(13, 0),
            "\u{1F54C}",
            TaskCategory::Spiritual,
            "Pause, pray, and nourish yourself",
        )
        .with_time_range("13:00 - 14:00"),
        Task::new(
            "5",
            "Asr Namaz & Protein Snack",
            tod(17, 0),
            "\u{1F54C}",
            TaskCategory::Spiritual,
            "Afternoon renewal for body and soul",
        )
        .with_time_range("17:00 - 18:00"),
        Task::new(
            "6",
            "Isha Namaz & Dinner",
            tod(21, 0),
            "\u{1F54C}",
            TaskCategory::Spiritual,
            "End your day with gratitude and nourishment",
        ),
        Task::new(
            "7",
            "Sleep",
            tod(23, 0),
            "\u{1F634}",
            TaskCategory::Rest,
            "Rest well - tomorrow is a new blessing",
        )
        .with_time_range("23:00 - 00:00"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_parses_and_displays() {
        let t: TimeOfDay = "05:00".parse().unwrap();
        assert_eq!(t.hour(), 5);
        assert_eq!(t.minute(), 0);
        assert_eq!(t.to_string(), "05:00");
    }

    #[test]
    fn time_of_day_rejects_out_of_range() {
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn minutes_since_midnight() {
        let t = TimeOfDay::new(13, 5).unwrap();
        assert_eq!(t.minutes_since_midnight(), 13 * 60 + 5);
    }

    #[test]
    fn task_serialization_round_trip() {
        let task = default_routine().remove(1);
        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, task.id);
        assert_eq!(decoded.time, task.time);
        assert_eq!(decoded.time_range.as_deref(), Some("06:00 - 08:00"));
    }

    #[test]
    fn time_serializes_as_hh_mm_string() {
        let json = serde_json::to_string(&TimeOfDay::new(8, 30).unwrap()).unwrap();
        assert_eq!(json, "\"08:30\"");
    }

    #[test]
    fn default_routine_has_seven_tasks() {
        let routine = default_routine();
        assert_eq!(routine.len(), 7);
        assert!(routine.iter().all(|t| !t.completed));
    }
}
