//! Booking constraint (restricted hours) models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A time span during which reservations are disallowed
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ConstraintRange {
    /// Range start (HH:MM:SS)
    pub initial_time: NaiveTime,
    /// Range end, exclusive (HH:MM:SS)
    pub end_time: NaiveTime,
}

/// Reservation restrictions for one date.
///
/// Only restricted spans are stored; hours outside every range are open.
/// Unlike massagist availability there is no weekday fallback.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Constraint {
    pub id: i32,
    pub day: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub ranges: Vec<ConstraintRange>,
}

/// Constraint row without its ranges (repository-internal shape)
#[derive(Debug, Clone, FromRow)]
pub struct ConstraintRow {
    pub id: i32,
    pub day: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Save the restrictions of one date from editor grid cells
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveConstraint {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// One restricted flag per timeline slot
    pub cells: Vec<bool>,
}

/// Response when saving all-open cells removed the day's constraint
#[derive(Debug, Serialize, ToSchema)]
pub struct ConstraintDeleted {
    pub detail: String,
}
