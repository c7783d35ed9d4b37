//! Availability precedence resolver.
//!
//! For a given date the punctual record for that exact date wins; otherwise
//! the weekday default applies; otherwise there is no availability (the
//! caller treats that as zero massagists everywhere, not as an error).

use chrono::{Datelike, NaiveDate};

use crate::models::availability::{Availability, AvailabilityKind};

/// Select the availability record governing `day`, by precedence
pub fn resolve_for_day(day: NaiveDate, records: &[Availability]) -> Option<&Availability> {
    if let Some(punctual) = records
        .iter()
        .find(|a| a.kind == AvailabilityKind::Punctual && a.punctual_day == Some(day))
    {
        return Some(punctual);
    }

    // ISO weekday, 1=Monday..7=Sunday
    let weekday = day.weekday().number_from_monday() as i16;
    records
        .iter()
        .find(|a| a.kind == AvailabilityKind::Weekday && a.weekday == Some(weekday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(kind: AvailabilityKind, punctual_day: Option<&str>, weekday: Option<i16>, id: i32) -> Availability {
        Availability {
            id,
            kind,
            punctual_day: punctual_day.map(|d| d.parse().unwrap()),
            weekday,
            created_at: DateTime::<Utc>::MIN_UTC,
            ranges: Vec::new(),
        }
    }

    #[test]
    fn punctual_wins_over_weekday() {
        // 2025-06-21 is a Saturday (ISO weekday 6)
        let day: NaiveDate = "2025-06-21".parse().unwrap();
        let records = vec![
            record(AvailabilityKind::Weekday, None, Some(6), 1),
            record(AvailabilityKind::Punctual, Some("2025-06-21"), None, 2),
        ];
        assert_eq!(resolve_for_day(day, &records).unwrap().id, 2);
    }

    #[test]
    fn falls_back_to_weekday() {
        let day: NaiveDate = "2025-06-21".parse().unwrap();
        let records = vec![
            record(AvailabilityKind::Punctual, Some("2025-06-22"), None, 1),
            record(AvailabilityKind::Weekday, None, Some(6), 2),
        ];
        assert_eq!(resolve_for_day(day, &records).unwrap().id, 2);
    }

    #[test]
    fn sunday_is_weekday_seven() {
        // 2025-06-22 is a Sunday
        let day: NaiveDate = "2025-06-22".parse().unwrap();
        let records = vec![record(AvailabilityKind::Weekday, None, Some(7), 1)];
        assert_eq!(resolve_for_day(day, &records).unwrap().id, 1);
    }

    #[test]
    fn none_when_nothing_matches() {
        let day: NaiveDate = "2025-06-23".parse().unwrap();
        let records = vec![record(AvailabilityKind::Weekday, None, Some(6), 1)];
        assert!(resolve_for_day(day, &records).is_none());
    }
}
