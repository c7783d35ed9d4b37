//! Bookings service: staff booking creation, detail edits and audit logs

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::booking::{
        BathRequest, Booking, BookingDetail, BookingLog, CreateBooking, UpdateBookingDetail,
    },
    models::product::{BathLine, CreateProduct, MassageType, MASSAGE_DURATIONS},
    repository::{bookings::InsertBooking, products::bath_type_name, Repository},
    schedule::{self, DecodeMode, RawRange, Timeline},
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    timeline: Timeline,
}

impl BookingsService {
    pub fn new(repository: Repository, timeline: Timeline) -> Self {
        Self { repository, timeline }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    pub async fn list_by_date(&self, date: &str) -> AppResult<Vec<Booking>> {
        let day = super::parse_local_date(date)?;
        self.repository.bookings.list_by_date(day).await
    }

    pub async fn detail(&self, id: i32) -> AppResult<BookingDetail> {
        self.repository.bookings.get_detail(id).await
    }

    /// Create a booking on behalf of a client at the front desk.
    ///
    /// The requested bath lines become a hidden product attached to the
    /// booking. Capacity, restriction and massages-vs-people checks apply
    /// unless `force` is set.
    pub async fn create(&self, data: CreateBooking) -> AppResult<BookingDetail> {
        let day = super::parse_local_date(&data.booking_date)?;
        let hour = super::parse_hour(&data.hour)?;

        let slot_index = self
            .timeline
            .index_of(&data.hour)
            .ok_or_else(|| {
                AppError::Validation(format!("hour '{}' is not a bookable slot", data.hour))
            })?;

        if data.people < 1 {
            return Err(AppError::Validation("people must be at least 1".to_string()));
        }
        if data.baths.is_empty() {
            return Err(AppError::Validation(
                "at least one bath line is required".to_string(),
            ));
        }
        validate_baths(&data.baths)?;

        if !data.force {
            if massage_count(&data.baths) > data.people {
                return Err(AppError::BusinessRule(
                    ErrorCode::BadValue,
                    "more massages requested than people in the booking".to_string(),
                ));
            }
            self.check_capacity(day, hour, data.people).await?;
            self.check_restrictions(day, slot_index).await?;
        }

        let client_id = self.resolve_client(&data).await?;
        let product = self.create_hidden_product(&data.baths).await?;

        let order_id = self.generate_order_id(day).await?;
        let booking = self
            .repository
            .bookings
            .create(&InsertBooking {
                internal_order_id: order_id,
                booking_date: day,
                hour,
                people: data.people,
                comment: data.comment.clone(),
                amount_paid: Decimal::ZERO,
                amount_pending: product.price,
                client_id,
                product_id: product.id,
            })
            .await?;

        tracing::info!(
            booking_id = booking.id,
            order_id = %booking.internal_order_id,
            date = %day,
            "booking created"
        );
        self.repository.bookings.get_detail(booking.id).await
    }

    /// Apply a detail-dialog edit; every changed field is written to the
    /// booking's audit log
    pub async fn update_detail(&self, id: i32, data: UpdateBookingDetail) -> AppResult<BookingDetail> {
        let current = self.repository.bookings.get_by_id(id).await?;
        let mut updated = current.clone();
        let mut changes = Vec::new();

        if let Some(ref date) = data.booking_date {
            let day = super::parse_local_date(date)?;
            if day != current.booking_date {
                changes.push(format!("date: {} -> {}", current.booking_date, day));
                updated.booking_date = day;
            }
        }
        if let Some(ref hour) = data.hour {
            let hour = super::parse_hour(hour)?;
            if self.timeline.index_of(&hour.to_string()).is_none() {
                return Err(AppError::Validation(format!(
                    "hour '{}' is not a bookable slot",
                    hour
                )));
            }
            if hour != current.hour {
                changes.push(format!("hour: {} -> {}", current.hour, hour));
                updated.hour = hour;
            }
        }
        if let Some(people) = data.people {
            if people < 1 {
                return Err(AppError::Validation("people must be at least 1".to_string()));
            }
            if people != current.people {
                changes.push(format!("people: {} -> {}", current.people, people));
                updated.people = people;
            }
        }
        if let Some(ref comment) = data.comment {
            if Some(comment) != current.comment.as_ref() {
                changes.push("comment updated".to_string());
                updated.comment = Some(comment.clone());
            }
        }
        if let Some(amount) = data.amount_paid {
            if amount != current.amount_paid {
                changes.push(format!("amount paid: {} -> {}", current.amount_paid, amount));
                updated.amount_paid = amount;
            }
        }
        if let Some(amount) = data.amount_pending {
            if amount != current.amount_pending {
                changes.push(format!(
                    "amount pending: {} -> {}",
                    current.amount_pending, amount
                ));
                updated.amount_pending = amount;
            }
        }
        if let Some(payment_date) = data.payment_date {
            if Some(payment_date) != current.payment_date {
                changes.push(format!("payment date set to {}", payment_date));
                updated.payment_date = Some(payment_date);
            }
        }
        if let Some(checked_in) = data.checked_in {
            if checked_in != current.checked_in {
                changes.push(format!("checked in: {}", checked_in));
                updated.checked_in = checked_in;
            }
        }
        if let Some(checked_out) = data.checked_out {
            if checked_out != current.checked_out {
                changes.push(format!("checked out: {}", checked_out));
                updated.checked_out = checked_out;
            }
        }
        if let Some(product_id) = data.product_id {
            if product_id != current.product_id {
                self.repository.products.get_by_id(product_id).await?;
                changes.push(format!("product: {} -> {}", current.product_id, product_id));
                updated.product_id = product_id;
            }
        }

        if !changes.is_empty() || data.log_comment.is_some() {
            self.repository.bookings.update(&updated).await?;

            let mut entry = changes.join("; ");
            if let Some(ref extra) = data.log_comment {
                if entry.is_empty() {
                    entry = extra.clone();
                } else {
                    entry = format!("{} ({})", entry, extra);
                }
            }
            if !entry.is_empty() {
                self.repository.bookings.create_log(id, &entry).await?;
            }
        }

        self.repository.bookings.get_detail(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.bookings.delete(id).await
    }

    pub async fn logs(&self, id: i32) -> AppResult<Vec<BookingLog>> {
        self.repository.bookings.get_by_id(id).await?;
        self.repository.bookings.list_logs(id).await
    }

    pub async fn add_log(&self, id: i32, comment: &str) -> AppResult<BookingLog> {
        self.repository.bookings.get_by_id(id).await?;
        self.repository.bookings.create_log(id, comment).await
    }

    async fn check_capacity(
        &self,
        day: NaiveDate,
        hour: chrono::NaiveTime,
        people: i32,
    ) -> AppResult<()> {
        let capacity = self
            .repository
            .capacity
            .get()
            .await?
            .ok_or(AppError::CapacityMissing)?;

        let occupancy = self.repository.bookings.occupancy_for_slot(day, hour).await?;
        if occupancy + i64::from(people) > i64::from(capacity.value) {
            return Err(AppError::BusinessRule(
                ErrorCode::CapacityExceeded,
                format!(
                    "slot {} on {} has {} of {} places taken",
                    hour, day, occupancy, capacity.value
                ),
            ));
        }
        Ok(())
    }

    async fn check_restrictions(&self, day: NaiveDate, slot_index: usize) -> AppResult<()> {
        let Some(constraint) = self.repository.constraints.find_by_day(day).await? else {
            return Ok(());
        };

        let ranges: Vec<RawRange<bool>> = constraint
            .ranges
            .iter()
            .map(|r| RawRange {
                initial_time: r.initial_time.to_string(),
                end_time: r.end_time.to_string(),
                value: true,
            })
            .collect();

        let decoded = schedule::decode(&ranges, &self.timeline, DecodeMode::Lenient)?;
        if decoded.cells.get(slot_index).copied().unwrap_or(false) {
            return Err(AppError::BusinessRule(
                ErrorCode::SlotRestricted,
                format!("reservations are restricted at that hour on {}", day),
            ));
        }
        Ok(())
    }

    async fn resolve_client(&self, data: &CreateBooking) -> AppResult<i32> {
        match (data.client_id, &data.client) {
            (Some(id), _) => {
                self.repository.clients.get_by_id(id).await?;
                Ok(id)
            }
            (None, Some(new_client)) => {
                new_client
                    .validate()
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                let created = self
                    .repository
                    .clients
                    .create(&crate::models::client::CreateClient {
                        name: new_client.name.clone(),
                        surname: new_client.surname.clone(),
                        phone_number: new_client.phone_number.clone(),
                        email: new_client.email.clone(),
                    })
                    .await?;
                Ok(created.id)
            }
            (None, None) => Err(AppError::Validation(
                "either client_id or client data is required".to_string(),
            )),
        }
    }

    /// Bath lines become a hidden, booking-specific product.
    ///
    /// Each line is priced at its bath type's unit price times quantity;
    /// the resulting product price becomes the booking's pending amount.
    async fn create_hidden_product(
        &self,
        baths: &[BathRequest],
    ) -> AppResult<crate::models::product::Product> {
        let lines: Vec<BathLine> = baths
            .iter()
            .map(|b| BathLine {
                massage_type: b.massage_type,
                massage_duration: b.minutes,
                quantity: b.quantity,
            })
            .collect();

        // Resolve the bath types up front: an existing type keeps its real
        // tariff, a new one starts at zero.
        let mut unit_prices = Vec::with_capacity(lines.len());
        for line in &lines {
            let bath_type = self
                .repository
                .products
                .get_or_create_bath_type(
                    line.massage_type,
                    line.massage_duration,
                    &bath_type_name(line),
                    Decimal::ZERO,
                )
                .await?;
            unit_prices.push(bath_type.price);
        }

        let name = lines
            .iter()
            .map(|l| format!("{} x {}", l.quantity, bath_type_name(l)))
            .collect::<Vec<_>>()
            .join(", ");

        let uses_massagist = lines
            .iter()
            .any(|l| l.massage_duration > 0 && l.massage_type != MassageType::None);

        self.repository
            .products
            .create(&CreateProduct {
                name,
                observation: None,
                description: None,
                price: composition_price(&lines, &unit_prices),
                uses_capacity: true,
                uses_massagist,
                visible: false,
                baths: lines,
            })
            .await
    }

    /// Order id: booking date as ddmmyyyy plus four random digits, retried
    /// until unused
    async fn generate_order_id(&self, day: NaiveDate) -> AppResult<String> {
        loop {
            let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
            let candidate = order_id_candidate(day, suffix);
            if !self.repository.bookings.order_id_exists(&candidate).await? {
                return Ok(candidate);
            }
        }
    }
}

fn order_id_candidate(day: NaiveDate, suffix: u32) -> String {
    format!("{}{:04}", day.format("%d%m%Y"), suffix)
}

/// Total price of a bath composition, each line at its bath type's unit price
fn composition_price(lines: &[BathLine], unit_prices: &[Decimal]) -> Decimal {
    lines
        .iter()
        .zip(unit_prices)
        .map(|(line, unit)| *unit * Decimal::from(line.quantity))
        .sum()
}

fn validate_baths(baths: &[BathRequest]) -> AppResult<()> {
    for bath in baths {
        if !MASSAGE_DURATIONS.contains(&bath.minutes) {
            return Err(AppError::Validation(format!(
                "invalid massage duration {} (allowed: 0, 15, 30, 60)",
                bath.minutes
            )));
        }
        if bath.quantity < 1 {
            return Err(AppError::Validation(
                "bath quantity must be at least 1".to_string(),
            ));
        }
    }
    Ok(())
}

/// Massages requested across all lines; bath-only lines do not count
fn massage_count(baths: &[BathRequest]) -> i32 {
    baths
        .iter()
        .filter(|b| b.minutes > 0 && b.massage_type != MassageType::None)
        .map(|b| b.quantity)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_is_ddmmyyyy_plus_four_digits() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        assert_eq!(order_id_candidate(day, 7), "210620250007");
        assert_eq!(order_id_candidate(day, 9999), "210620259999");
    }

    #[test]
    fn massage_count_skips_bath_only_lines() {
        let baths = vec![
            BathRequest { massage_type: MassageType::Relax, minutes: 60, quantity: 2 },
            BathRequest { massage_type: MassageType::None, minutes: 0, quantity: 3 },
            BathRequest { massage_type: MassageType::Rock, minutes: 15, quantity: 1 },
        ];
        assert_eq!(massage_count(&baths), 3);
    }

    #[test]
    fn hidden_product_price_sums_lines_at_unit_price() {
        let lines = vec![
            BathLine { massage_type: MassageType::Relax, massage_duration: 60, quantity: 2 },
            BathLine { massage_type: MassageType::None, massage_duration: 0, quantity: 3 },
        ];
        // 2 x 25.50 + 3 x 10.00
        let unit_prices = vec![Decimal::new(2550, 2), Decimal::new(1000, 2)];
        assert_eq!(composition_price(&lines, &unit_prices), Decimal::new(8100, 2));
    }

    #[test]
    fn unpriced_bath_types_yield_a_free_product() {
        let lines = vec![BathLine {
            massage_type: MassageType::Rock,
            massage_duration: 15,
            quantity: 4,
        }];
        assert_eq!(composition_price(&lines, &[Decimal::ZERO]), Decimal::ZERO);
    }

    #[test]
    fn rejects_off_menu_durations() {
        let baths = vec![BathRequest {
            massage_type: MassageType::Relax,
            minutes: 45,
            quantity: 1,
        }];
        assert!(validate_baths(&baths).is_err());
    }
}
