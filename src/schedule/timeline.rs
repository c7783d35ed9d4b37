//! Discretized day timeline.
//!
//! A timeline is the ordered list of slot labels (`HH:MM`) the schedule grid
//! and the range/cell codec operate on. It is immutable once built and
//! regenerated whenever the configured start/end/step change.

use crate::config::ScheduleConfig;
use crate::error::{AppError, AppResult};

/// Fixed day timeline: equally spaced slot labels plus an end-of-day sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    start_minutes: u32,
    step_minutes: u32,
    labels: Vec<String>,
    /// Boundary time written for a run that reaches the last slot (HH:MM)
    sentinel: String,
}

/// Parse `HH:MM` or `HH:MM:SS` into minutes since midnight, ignoring seconds
fn parse_minutes(s: &str) -> Option<u32> {
    let mut parts = s.splitn(3, ':');
    let h: u32 = parts.next()?.parse().ok()?;
    let m: u32 = parts.next()?.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

fn format_label(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

impl Timeline {
    /// Build a timeline from a start and an inclusive end boundary.
    ///
    /// The end boundary is included as the last slot label (10:00-22:00 step
    /// 30 yields 25 labels) and doubles as the end-of-day sentinel, matching
    /// the stored `22:00:00` form of full-day ranges.
    pub fn new(start: &str, end: &str, step_minutes: u32) -> AppResult<Self> {
        if step_minutes == 0 {
            return Err(AppError::Validation("step_minutes must be positive".to_string()));
        }
        let start_minutes = parse_minutes(start)
            .ok_or_else(|| AppError::Validation(format!("invalid start time '{}'", start)))?;
        let end_minutes = parse_minutes(end)
            .ok_or_else(|| AppError::Validation(format!("invalid end time '{}'", end)))?;
        if end_minutes < start_minutes {
            return Err(AppError::Validation("end time before start time".to_string()));
        }

        let mut labels = Vec::new();
        let mut minutes = start_minutes;
        while minutes <= end_minutes {
            labels.push(format_label(minutes));
            minutes += step_minutes;
        }

        Ok(Self {
            start_minutes,
            step_minutes,
            sentinel: format_label(end_minutes),
            labels,
        })
    }

    /// Build a timeline from a start and a slot count.
    ///
    /// Here the sentinel is the arithmetic boundary one step past the last
    /// slot, so a run covering the last slot round-trips unambiguously.
    pub fn with_slots(start: &str, step_minutes: u32, slots: usize) -> AppResult<Self> {
        if step_minutes == 0 || slots == 0 {
            return Err(AppError::Validation("step_minutes and slots must be positive".to_string()));
        }
        let start_minutes = parse_minutes(start)
            .ok_or_else(|| AppError::Validation(format!("invalid start time '{}'", start)))?;

        let labels = (0..slots)
            .map(|i| format_label(start_minutes + i as u32 * step_minutes))
            .collect();

        Ok(Self {
            start_minutes,
            step_minutes,
            sentinel: format_label(start_minutes + slots as u32 * step_minutes),
            labels,
        })
    }

    pub fn from_config(config: &ScheduleConfig) -> AppResult<Self> {
        Self::new(&config.start_time, &config.end_time, config.step_minutes)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_minutes
    }

    /// Slot index of a time string, truncated to `HH:MM`
    pub fn index_of(&self, time: &str) -> Option<usize> {
        let hhmm = time.get(0..5)?;
        self.labels.iter().position(|l| l == hhmm)
    }

    /// `HH:MM` form of the end-of-day sentinel
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Boundary time after slot `index - 1`, serialized `HH:MM:00`.
    ///
    /// `index` may equal `len()`, in which case the sentinel is used.
    pub fn boundary(&self, index: usize) -> String {
        if index < self.labels.len() {
            format!("{}:00", self.labels[index])
        } else {
            format!("{}:00", self.sentinel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_day_has_25_slots() {
        let t = Timeline::new("10:00", "22:00", 30).unwrap();
        assert_eq!(t.len(), 25);
        assert_eq!(t.labels()[0], "10:00");
        assert_eq!(t.labels()[24], "22:00");
        assert_eq!(t.sentinel(), "22:00");
    }

    #[test]
    fn with_slots_uses_arithmetic_sentinel() {
        let t = Timeline::with_slots("10:00", 30, 5).unwrap();
        assert_eq!(t.labels(), &["10:00", "10:30", "11:00", "11:30", "12:00"]);
        assert_eq!(t.sentinel(), "12:30");
        assert_eq!(t.boundary(5), "12:30:00");
    }

    #[test]
    fn index_of_truncates_seconds() {
        let t = Timeline::new("10:00", "22:00", 30).unwrap();
        assert_eq!(t.index_of("10:30:00"), Some(1));
        assert_eq!(t.index_of("10:30"), Some(1));
        assert_eq!(t.index_of("10:15:00"), None);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(Timeline::new("10:00", "22:00", 0).is_err());
        assert!(Timeline::new("22:00", "10:00", 30).is_err());
        assert!(Timeline::new("banana", "22:00", 30).is_err());
        assert!(Timeline::new("25:00", "26:00", 30).is_err());
    }

    #[test]
    fn single_slot_day() {
        let t = Timeline::new("10:00", "10:00", 30).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.boundary(1), "10:00:00");
    }
}
