//! Booking model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::product::{MassageType, ProductBath};

/// A reservation of the baths for a date and hour
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    /// Order identifier: ddmmyyyy plus four random digits
    pub internal_order_id: String,
    pub booking_date: NaiveDate,
    /// Entry hour; must fall on a timeline slot to count in the schedule grid
    pub hour: NaiveTime,
    pub people: i32,
    pub comment: Option<String>,
    pub amount_paid: Decimal,
    pub amount_pending: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
    pub checked_in: bool,
    pub checked_out: bool,
    pub client_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Booking with joined client and product information for the detail dialog
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookingDetail {
    pub id: i32,
    pub internal_order_id: String,
    pub booking_date: NaiveDate,
    pub hour: NaiveTime,
    pub people: i32,
    pub comment: Option<String>,
    pub amount_paid: Decimal,
    pub amount_pending: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
    pub checked_in: bool,
    pub checked_out: bool,
    pub client_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub client_surname: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    /// Bath composition of the attached product
    #[sqlx(skip)]
    pub product_baths: Vec<ProductBath>,
}

/// Audit log entry attached to a booking
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookingLog {
    pub id: i32,
    pub booking_id: i32,
    pub datetime: DateTime<Utc>,
    pub comment: String,
}

/// New-client fields for staff booking creation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewBookingClient {
    #[validate(length(min = 1))]
    pub name: String,
    pub surname: Option<String>,
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// One requested massage line in a staff booking
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BathRequest {
    pub massage_type: MassageType,
    /// Minutes: one of 0, 15, 30, 60
    pub minutes: i16,
    pub quantity: i32,
}

/// Staff booking creation request.
///
/// Either `client_id` (existing client) or `client` (new client fields) must
/// be provided. The `baths` composition is turned into a hidden product.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub client_id: Option<i32>,
    pub client: Option<NewBookingClient>,
    /// Booking date (YYYY-MM-DD, local calendar date)
    pub booking_date: String,
    /// Entry hour (HH:MM or HH:MM:SS)
    pub hour: String,
    pub people: i32,
    #[serde(default)]
    pub baths: Vec<BathRequest>,
    pub comment: Option<String>,
    /// Skip capacity and restriction checks
    #[serde(default)]
    pub force: bool,
}

/// Update request for the booking detail dialog.
///
/// Every changed field produces an audit log entry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingDetail {
    pub booking_date: Option<String>,
    pub hour: Option<String>,
    pub people: Option<i32>,
    pub comment: Option<String>,
    pub amount_paid: Option<Decimal>,
    pub amount_pending: Option<Decimal>,
    pub payment_date: Option<DateTime<Utc>>,
    pub checked_in: Option<bool>,
    pub checked_out: Option<bool>,
    pub product_id: Option<i32>,
    /// Free-form comment appended to the auto-generated log entry
    pub log_comment: Option<String>,
}

/// Create a booking log entry
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingLog {
    pub comment: String,
}
