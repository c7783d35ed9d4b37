//! Daily schedule grid (occupancy/availability matrix) output types

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// One timeline slot of the daily schedule grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScheduleSlotSummary {
    /// Slot label (HH:MM)
    pub time: String,
    /// People booked into this slot
    pub occupancy: i32,
    /// Capacity minus occupancy; negative signals overbooking
    pub available: i32,
    /// Massagists on duty during this slot
    pub massagists: i32,
    /// Massage minutes consumed by this slot's bookings
    pub occupied_minutes: i32,
    /// Remaining massage-minute budget for this slot
    pub available_minutes: i32,
}

/// A booking whose product lookup failed during minute resolution.
///
/// The booking still counts for occupancy but contributes zero massage
/// minutes; the calculation is not aborted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingMinutesError {
    pub booking_id: i32,
    pub message: String,
}

/// Full-day schedule grid for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub capacity: i32,
    /// One entry per timeline slot, in timeline order; always complete
    pub slots: Vec<ScheduleSlotSummary>,
    /// Per-booking lookup failures tolerated during the calculation
    pub errors: Vec<BookingMinutesError>,
    /// Availability ranges skipped because their boundaries missed the grid
    pub skipped_ranges: usize,
}
