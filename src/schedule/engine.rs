//! Schedule calculation engine.
//!
//! Produces the full-day per-slot occupancy/availability matrix from an
//! immutable snapshot: capacity, the day's bookings (with their massage
//! minutes already resolved) and the massagist availability ranges.
//! Same inputs always produce the same output.

use super::codec::{decode, DecodeMode, RawRange};
use super::timeline::Timeline;
use crate::error::AppResult;
use crate::models::schedule::ScheduleSlotSummary;

/// Massage-minute budget one massagist provides per timeline slot.
///
/// A 30-minute slot leaves 25 sellable massage minutes per massagist.
pub const DEFAULT_MINUTES_PER_MASSAGIST_SLOT: i32 = 25;

/// One booking reduced to what the engine aggregates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSlot {
    pub id: i32,
    /// Entry hour, `HH:MM` or `HH:MM:SS`; compared against slot labels
    pub hour: String,
    pub people: i32,
    /// Massage minutes of the attached product; 0 when the lookup failed
    pub massage_minutes: i32,
}

/// Engine result: the slot table plus decode observability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub slots: Vec<ScheduleSlotSummary>,
    /// Availability ranges skipped by the lenient decode
    pub skipped_ranges: usize,
}

/// Compute the per-slot schedule summary for one day.
///
/// The output always contains exactly one entry per timeline slot, in
/// timeline order. Available places are capacity minus occupancy and are
/// deliberately not clamped: a negative value is the overbooking signal.
pub fn calculate(
    timeline: &Timeline,
    capacity: i32,
    bookings: &[BookingSlot],
    massagist_ranges: &[RawRange<i32>],
    mode: DecodeMode,
    minutes_per_massagist: i32,
) -> AppResult<EngineOutput> {
    let availability = decode(massagist_ranges, timeline, mode)?;

    let slots = timeline
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let mut occupancy = 0;
            let mut occupied_minutes = 0;
            for booking in bookings {
                if booking.hour.get(0..5) == Some(label.as_str()) {
                    occupancy += booking.people;
                    occupied_minutes += booking.massage_minutes;
                }
            }

            let massagists = availability.cells[index];
            ScheduleSlotSummary {
                time: label.clone(),
                occupancy,
                available: capacity - occupancy,
                massagists,
                occupied_minutes,
                available_minutes: massagists * minutes_per_massagist - occupied_minutes,
            }
        })
        .collect();

    Ok(EngineOutput {
        slots,
        skipped_ranges: availability.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> Timeline {
        Timeline::new("10:00", "22:00", 30).unwrap()
    }

    fn booking(id: i32, hour: &str, people: i32, minutes: i32) -> BookingSlot {
        BookingSlot { id, hour: hour.to_string(), people, massage_minutes: minutes }
    }

    #[test]
    fn aggregates_occupancy_per_slot() {
        let t = day();
        let bookings = vec![
            booking(1, "10:00:00", 2, 0),
            booking(2, "10:00:00", 3, 0),
            booking(3, "10:30:00", 1, 0),
        ];
        let out = calculate(&t, 8, &bookings, &[], DecodeMode::Lenient, 25).unwrap();

        assert_eq!(out.slots.len(), 25);
        assert_eq!(out.slots[0].occupancy, 5);
        assert_eq!(out.slots[0].available, 3);
        assert_eq!(out.slots[1].occupancy, 1);
        assert_eq!(out.slots[1].available, 7);
        for slot in &out.slots[2..] {
            assert_eq!(slot.occupancy, 0);
            assert_eq!(slot.available, 8);
        }
    }

    #[test]
    fn overbooking_yields_negative_available() {
        let t = day();
        let bookings = vec![booking(1, "12:00:00", 10, 0)];
        let out = calculate(&t, 8, &bookings, &[], DecodeMode::Lenient, 25).unwrap();
        let slot = out.slots.iter().find(|s| s.time == "12:00").unwrap();
        assert_eq!(slot.occupancy, 10);
        assert_eq!(slot.available, -2);
    }

    #[test]
    fn minute_budget_per_massagist() {
        let t = day();
        let ranges = vec![RawRange {
            initial_time: "10:00:00".into(),
            end_time: "22:00:00".into(),
            value: 2,
        }];

        // no occupied minutes: 2 * 25 = 50
        let out = calculate(&t, 8, &[], &ranges, DecodeMode::Lenient, 25).unwrap();
        assert_eq!(out.slots[0].massagists, 2);
        assert_eq!(out.slots[0].available_minutes, 50);

        // 30 occupied minutes: 50 - 30 = 20
        let bookings = vec![booking(1, "10:00:00", 1, 30)];
        let out = calculate(&t, 8, &bookings, &ranges, DecodeMode::Lenient, 25).unwrap();
        assert_eq!(out.slots[0].occupied_minutes, 30);
        assert_eq!(out.slots[0].available_minutes, 20);
    }

    #[test]
    fn failed_lookup_contributes_zero_minutes_but_counts_people() {
        let t = day();
        // services resolve failed product lookups to 0 minutes before the
        // engine runs; the slot table must still be complete
        let bookings = vec![booking(1, "11:00:00", 4, 0), booking(2, "11:00:00", 1, 60)];
        let out = calculate(&t, 8, &bookings, &[], DecodeMode::Lenient, 25).unwrap();
        assert_eq!(out.slots.len(), 25);
        let slot = out.slots.iter().find(|s| s.time == "11:00").unwrap();
        assert_eq!(slot.occupancy, 5);
        assert_eq!(slot.occupied_minutes, 60);
    }

    #[test]
    fn misaligned_booking_hour_counts_nowhere() {
        let t = day();
        let bookings = vec![booking(1, "10:15:00", 2, 15)];
        let out = calculate(&t, 8, &bookings, &[], DecodeMode::Lenient, 25).unwrap();
        assert!(out.slots.iter().all(|s| s.occupancy == 0));
    }

    #[test]
    fn skipped_ranges_are_reported() {
        let t = day();
        let ranges = vec![RawRange {
            initial_time: "10:05:00".into(),
            end_time: "11:00:00".into(),
            value: 3,
        }];
        let out = calculate(&t, 8, &[], &ranges, DecodeMode::Lenient, 25).unwrap();
        assert_eq!(out.skipped_ranges, 1);
        assert!(out.slots.iter().all(|s| s.massagists == 0));
    }

    #[test]
    fn identical_snapshots_produce_identical_output() {
        let t = day();
        let bookings = vec![booking(1, "13:00:00", 3, 45), booking(2, "18:30:00", 2, 0)];
        let ranges = vec![RawRange {
            initial_time: "12:00:00".into(),
            end_time: "20:00:00".into(),
            value: 1,
        }];
        let first = calculate(&t, 10, &bookings, &ranges, DecodeMode::Lenient, 25).unwrap();
        let second = calculate(&t, 10, &bookings, &ranges, DecodeMode::Lenient, 25).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_minute_budget() {
        let t = day();
        let ranges = vec![RawRange {
            initial_time: "10:00:00".into(),
            end_time: "22:00:00".into(),
            value: 1,
        }];
        let out = calculate(&t, 8, &[], &ranges, DecodeMode::Lenient, 30).unwrap();
        assert_eq!(out.slots[0].available_minutes, 30);
    }
}
