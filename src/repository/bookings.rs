//! Bookings repository for database operations

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::booking::{Booking, BookingDetail, BookingLog},
    models::product::ProductBath,
};

/// Insert parameters for a new booking row
#[derive(Debug)]
pub struct InsertBooking {
    pub internal_order_id: String,
    pub booking_date: NaiveDate,
    pub hour: NaiveTime,
    pub people: i32,
    pub comment: Option<String>,
    pub amount_paid: Decimal,
    pub amount_pending: Decimal,
    pub client_id: i32,
    pub product_id: i32,
}

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all bookings, newest first
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List the bookings of one date, ordered by hour
    pub async fn list_by_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE booking_date = $1 ORDER BY hour"
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchBooking, format!("Booking {} not found", id)))
    }

    /// Booking with joined client data and the product's bath composition
    pub async fn get_detail(&self, id: i32) -> AppResult<BookingDetail> {
        let mut detail = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT b.*, c.name AS client_name, c.surname AS client_surname,
                   c.phone_number AS client_phone, c.email AS client_email
            FROM bookings b
            JOIN clients c ON b.client_id = c.id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchBooking, format!("Booking {} not found", id)))?;

        detail.product_baths = sqlx::query_as::<_, ProductBath>(
            r#"
            SELECT bt.massage_type, bt.massage_duration, pb.quantity, bt.name, bt.price
            FROM product_baths pb
            JOIN bath_types bt ON pb.bath_type_id = bt.id
            WHERE pb.product_id = $1
            ORDER BY bt.massage_duration DESC, bt.name
            "#,
        )
        .bind(detail.product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(detail)
    }

    /// Whether an internal order id is already taken
    pub async fn order_id_exists(&self, order_id: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE internal_order_id = $1"
        )
        .bind(order_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// People already booked into one slot of one date
    pub async fn occupancy_for_slot(&self, date: NaiveDate, hour: NaiveTime) -> AppResult<i64> {
        let sum: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(people)::bigint FROM bookings WHERE booking_date = $1 AND hour = $2"
        )
        .bind(date)
        .bind(hour)
        .fetch_one(&self.pool)
        .await?;
        Ok(sum.unwrap_or(0))
    }

    /// Insert a booking
    pub async fn create(&self, data: &InsertBooking) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (internal_order_id, booking_date, hour, people, comment,
                 amount_paid, amount_pending, client_id, product_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.internal_order_id)
        .bind(data.booking_date)
        .bind(data.hour)
        .bind(data.people)
        .bind(&data.comment)
        .bind(data.amount_paid)
        .bind(data.amount_pending)
        .bind(data.client_id)
        .bind(data.product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite all editable fields of a booking.
    ///
    /// The service computes the final field values (and the audit log diff)
    /// from the current row before calling this.
    pub async fn update(&self, booking: &Booking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                booking_date = $2, hour = $3, people = $4, comment = $5,
                amount_paid = $6, amount_pending = $7, payment_date = $8,
                checked_in = $9, checked_out = $10, product_id = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.booking_date)
        .bind(booking.hour)
        .bind(booking.people)
        .bind(&booking.comment)
        .bind(booking.amount_paid)
        .bind(booking.amount_pending)
        .bind(booking.payment_date)
        .bind(booking.checked_in)
        .bind(booking.checked_out)
        .bind(booking.product_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchBooking, format!("Booking {} not found", booking.id)))
    }

    /// Delete a booking (cascade deletes its logs)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchBooking, format!("Booking {} not found", id)));
        }
        Ok(())
    }

    /// Audit log entries of a booking, oldest first
    pub async fn list_logs(&self, booking_id: i32) -> AppResult<Vec<BookingLog>> {
        let rows = sqlx::query_as::<_, BookingLog>(
            "SELECT * FROM booking_logs WHERE booking_id = $1 ORDER BY datetime"
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Append an audit log entry
    pub async fn create_log(&self, booking_id: i32, comment: &str) -> AppResult<BookingLog> {
        let row = sqlx::query_as::<_, BookingLog>(
            r#"
            INSERT INTO booking_logs (booking_id, comment)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
