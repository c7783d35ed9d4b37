//! Massagist availability models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Scope of an availability record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "availability_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityKind {
    /// Default rule for a day of the week
    Weekday,
    /// Override for one exact date; wins over the weekday rule
    Punctual,
}

/// A contiguous time span with a massagist head count.
///
/// Ranges within one record are disjoint and maximal: adjacent ranges never
/// carry the same count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailabilityRange {
    /// Range start (HH:MM:SS)
    pub initial_time: NaiveTime,
    /// Range end, exclusive (HH:MM:SS)
    pub end_time: NaiveTime,
    /// Massagists on duty during the range
    pub massagists_availability: i32,
}

/// A massagist availability record: either a weekday default or a punctual
/// per-date override, with its time ranges
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Availability {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: AvailabilityKind,
    /// Exact date, set when kind is punctual
    pub punctual_day: Option<NaiveDate>,
    /// ISO weekday 1=Monday..7=Sunday, set when kind is weekday
    pub weekday: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub ranges: Vec<AvailabilityRange>,
}

/// Availability row without its ranges (repository-internal shape)
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityRow {
    pub id: i32,
    pub kind: AvailabilityKind,
    pub punctual_day: Option<NaiveDate>,
    pub weekday: Option<i16>,
    pub created_at: DateTime<Utc>,
}

/// Create/update availability request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveAvailability {
    #[serde(rename = "type")]
    pub kind: AvailabilityKind,
    pub punctual_day: Option<NaiveDate>,
    pub weekday: Option<i16>,
    pub ranges: Vec<AvailabilityRange>,
}

/// Upsert the punctual availability of one date from editor grid cells
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveDayAvailability {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// One massagist count per timeline slot
    pub cells: Vec<i32>,
}

/// Upsert the default availability of one weekday from editor grid cells
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveWeekdayAvailability {
    /// ISO weekday 1=Monday..7=Sunday
    pub weekday: i16,
    /// One massagist count per timeline slot
    pub cells: Vec<i32>,
}

impl SaveAvailability {
    /// Scope fields must be coherent with the kind: exactly one of
    /// `punctual_day` and `weekday`, matching it
    pub fn validate(&self) -> Result<(), String> {
        match self.kind {
            AvailabilityKind::Punctual => {
                if self.punctual_day.is_none() {
                    return Err("punctual availability requires punctual_day".to_string());
                }
                if self.weekday.is_some() {
                    return Err("punctual availability must not carry weekday".to_string());
                }
                Ok(())
            }
            AvailabilityKind::Weekday => {
                if self.punctual_day.is_some() {
                    return Err("weekday availability must not carry punctual_day".to_string());
                }
                match self.weekday {
                    Some(w) if (1..=7).contains(&w) => Ok(()),
                    Some(w) => Err(format!("weekday must be 1..7, got {}", w)),
                    None => Err("weekday availability requires weekday".to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: AvailabilityKind, punctual_day: Option<NaiveDate>, weekday: Option<i16>) -> SaveAvailability {
        SaveAvailability {
            kind,
            punctual_day,
            weekday,
            ranges: Vec::new(),
        }
    }

    #[test]
    fn accepts_coherent_scopes() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 21);
        assert!(record(AvailabilityKind::Punctual, day, None).validate().is_ok());
        assert!(record(AvailabilityKind::Weekday, None, Some(6)).validate().is_ok());
    }

    #[test]
    fn rejects_scope_fields_of_the_other_kind() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 21);
        assert!(record(AvailabilityKind::Punctual, day, Some(6)).validate().is_err());
        assert!(record(AvailabilityKind::Weekday, day, Some(6)).validate().is_err());
    }

    #[test]
    fn rejects_missing_or_out_of_range_scopes() {
        assert!(record(AvailabilityKind::Punctual, None, None).validate().is_err());
        assert!(record(AvailabilityKind::Weekday, None, None).validate().is_err());
        assert!(record(AvailabilityKind::Weekday, None, Some(0)).validate().is_err());
        assert!(record(AvailabilityKind::Weekday, None, Some(8)).validate().is_err());
    }
}
