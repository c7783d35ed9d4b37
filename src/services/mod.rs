//! Business logic services

pub mod availability;
pub mod bookings;
pub mod capacity;
pub mod clients;
pub mod constraints;
pub mod gift_vouchers;
pub mod products;
pub mod schedule;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    config::ScheduleConfig,
    error::{AppError, AppResult},
    repository::Repository,
    schedule::Timeline,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clients: clients::ClientsService,
    pub products: products::ProductsService,
    pub bookings: bookings::BookingsService,
    pub gift_vouchers: gift_vouchers::GiftVouchersService,
    pub availability: availability::AvailabilityService,
    pub constraints: constraints::ConstraintsService,
    pub capacity: capacity::CapacityService,
    pub schedule: schedule::ScheduleService,
}

impl Services {
    /// Create all services with the given repository and schedule settings
    pub fn new(repository: Repository, schedule_config: &ScheduleConfig) -> AppResult<Self> {
        let timeline = Timeline::from_config(schedule_config)?;

        Ok(Self {
            clients: clients::ClientsService::new(repository.clone()),
            products: products::ProductsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), timeline.clone()),
            gift_vouchers: gift_vouchers::GiftVouchersService::new(repository.clone()),
            availability: availability::AvailabilityService::new(repository.clone(), timeline.clone()),
            constraints: constraints::ConstraintsService::new(repository.clone(), timeline.clone()),
            capacity: capacity::CapacityService::new(repository.clone()),
            schedule: schedule::ScheduleService::new(repository, timeline, schedule_config),
        })
    }
}

/// Parse a local calendar date (`YYYY-MM-DD`).
///
/// Dates are stored and compared as local dates with no timezone; never go
/// through UTC here, that shifts the day around midnight.
pub fn parse_local_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse an hour string, `HH:MM` or `HH:MM:SS`
pub fn parse_hour(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("invalid hour '{}' (expected HH:MM[:SS])", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_dates() {
        assert_eq!(parse_local_date("2025-06-21").unwrap().to_string(), "2025-06-21");
        assert!(parse_local_date("21/06/2025").is_err());
        assert!(parse_local_date("2025-13-01").is_err());
    }

    #[test]
    fn parses_hours_with_and_without_seconds() {
        assert_eq!(parse_hour("10:30").unwrap().to_string(), "10:30:00");
        assert_eq!(parse_hour("10:30:00").unwrap().to_string(), "10:30:00");
        assert!(parse_hour("10h30").is_err());
    }
}
