//! Gift voucher model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A prepaid gift voucher redeemable for a product
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GiftVoucher {
    pub id: i32,
    /// Unique voucher code
    pub code: String,
    pub bought_date: DateTime<Utc>,
    pub price: Decimal,
    pub used: bool,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_surname: Option<String>,
    pub gift_name: Option<String>,
    pub gift_description: Option<String>,
    /// Client who bought the voucher
    pub buyer_client_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create gift voucher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGiftVoucher {
    /// Voucher code; generated when absent
    pub code: Option<String>,
    pub price: Decimal,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_surname: Option<String>,
    pub gift_name: Option<String>,
    pub gift_description: Option<String>,
    pub buyer_client_id: i32,
    pub product_id: i32,
}

/// Update gift voucher request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGiftVoucher {
    pub price: Option<Decimal>,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_surname: Option<String>,
    pub gift_name: Option<String>,
    pub gift_description: Option<String>,
    pub product_id: Option<i32>,
}
