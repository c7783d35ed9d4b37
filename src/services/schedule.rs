//! Day schedule orchestration.
//!
//! Gathers everything the grid needs for one date (capacity, bookings,
//! massagist availability, product compositions) and runs the engine.

use crate::{
    config::ScheduleConfig,
    error::{AppError, AppResult},
    models::booking::Booking,
    models::product::ProductBath,
    models::schedule::{BookingMinutesError, DaySchedule},
    repository::Repository,
    schedule::{calculate, resolve_for_day, BookingSlot, DecodeMode, RawRange, Timeline},
};

use super::products::massage_minutes;

#[derive(Clone)]
pub struct ScheduleService {
    repository: Repository,
    timeline: Timeline,
    mode: DecodeMode,
    minutes_per_massagist: i32,
}

impl ScheduleService {
    pub fn new(repository: Repository, timeline: Timeline, config: &ScheduleConfig) -> Self {
        let mode = if config.strict_ranges {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        };
        Self {
            repository,
            timeline,
            mode,
            minutes_per_massagist: config.minutes_per_massagist_slot,
        }
    }

    /// The full schedule grid of one date.
    ///
    /// A booking whose product composition cannot be loaded still occupies
    /// its slot; it just contributes zero massage minutes, and the failure is
    /// reported alongside the grid. The response always carries one summary
    /// per timeline slot.
    pub async fn day_schedule(&self, date: &str) -> AppResult<DaySchedule> {
        let day = super::parse_local_date(date)?;

        let (capacity, bookings, availabilities) = tokio::try_join!(
            self.repository.capacity.get(),
            self.repository.bookings.list_by_date(day),
            self.repository.availability.list(),
        )?;

        let capacity = capacity.ok_or(AppError::CapacityMissing)?;

        let massagist_ranges: Vec<RawRange<i32>> = resolve_for_day(day, &availabilities)
            .map(|record| {
                record
                    .ranges
                    .iter()
                    .map(|r| RawRange {
                        initial_time: r.initial_time.to_string(),
                        end_time: r.end_time.to_string(),
                        value: r.massagists_availability,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let mut errors = Vec::new();
        let mut slots = Vec::with_capacity(bookings.len());
        for booking in &bookings {
            let baths = self
                .repository
                .products
                .baths_for_product(booking.product_id)
                .await;
            slots.push(slot_for_booking(booking, baths, &mut errors));
        }

        let output = calculate(
            &self.timeline,
            capacity.value,
            &slots,
            &massagist_ranges,
            self.mode,
            self.minutes_per_massagist,
        )?;

        if output.skipped_ranges > 0 {
            tracing::warn!(
                date = %day,
                skipped = output.skipped_ranges,
                "availability ranges did not fit the timeline"
            );
        }

        Ok(DaySchedule {
            date: day,
            capacity: capacity.value,
            slots: output.slots,
            errors,
            skipped_ranges: output.skipped_ranges,
        })
    }
}

/// Engine input of one booking.
///
/// A failed composition lookup counts zero massage minutes and is recorded;
/// the booking still occupies its slot.
fn slot_for_booking(
    booking: &Booking,
    baths: AppResult<Vec<ProductBath>>,
    errors: &mut Vec<BookingMinutesError>,
) -> BookingSlot {
    let minutes = match baths {
        Ok(baths) => massage_minutes(&baths),
        Err(err) => {
            tracing::warn!(
                booking_id = booking.id,
                product_id = booking.product_id,
                error = %err,
                "massage minutes lookup failed, counting zero"
            );
            errors.push(BookingMinutesError {
                booking_id: booking.id,
                message: err.to_string(),
            });
            0
        }
    };
    BookingSlot {
        id: booking.id,
        hour: booking.hour.to_string(),
        people: booking.people,
        massage_minutes: minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::product::MassageType;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use rust_decimal::Decimal;

    fn booking(id: i32, hour: &str, people: i32) -> Booking {
        Booking {
            id,
            internal_order_id: format!("21062025{:04}", id),
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            hour: NaiveTime::parse_from_str(hour, "%H:%M").unwrap(),
            people,
            comment: None,
            amount_paid: Decimal::ZERO,
            amount_pending: Decimal::ZERO,
            payment_date: None,
            checked_in: false,
            checked_out: false,
            client_id: 1,
            product_id: 9,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn failed_composition_lookup_is_recorded_with_zero_minutes() {
        let mut errors = Vec::new();
        let slot = slot_for_booking(
            &booking(4, "12:00", 3),
            Err(AppError::NotFound(
                ErrorCode::NoSuchProduct,
                "Product 9 not found".to_string(),
            )),
            &mut errors,
        );

        assert_eq!(slot.massage_minutes, 0);
        assert_eq!(slot.people, 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].booking_id, 4);
        assert!(errors[0].message.contains("Product 9"));
    }

    #[test]
    fn resolved_composition_counts_minutes_without_errors() {
        let baths = vec![ProductBath {
            massage_type: MassageType::Relax,
            massage_duration: 60,
            quantity: 2,
            name: "Relax 60'".to_string(),
            price: Decimal::ZERO,
        }];
        let mut errors = Vec::new();

        let slot = slot_for_booking(&booking(7, "10:00", 2), Ok(baths), &mut errors);

        assert_eq!(slot.massage_minutes, 60);
        assert!(errors.is_empty());
    }
}
