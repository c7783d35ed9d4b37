//! Product and bath composition models

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Massage variants offered with a bath
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "massage_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MassageType {
    Relax,
    Rock,
    Exfoliation,
    /// Bath without massage
    None,
}

/// A sellable product (a bath package, possibly with massages)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub observation: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    /// Whether bookings of this product count against venue capacity
    pub uses_capacity: bool,
    /// Whether this product requires a massagist
    pub uses_massagist: bool,
    /// Hidden products (auto-created for staff bookings) are not listed
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bath type: a bath of fixed duration with an optional massage
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BathType {
    pub id: i32,
    pub name: String,
    pub massage_type: MassageType,
    /// Massage length in minutes; 0 means no massage
    pub massage_duration: i16,
    /// Duration of the bath itself
    pub baths_duration: NaiveTime,
    pub description: Option<String>,
    pub price: Decimal,
}

/// One bath line inside a product, with its quantity
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ProductBath {
    pub massage_type: MassageType,
    /// Massage length in minutes; 0 means no massage
    pub massage_duration: i16,
    pub quantity: i32,
    pub name: String,
    pub price: Decimal,
}

/// Bath line in a create/update product request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BathLine {
    pub massage_type: MassageType,
    /// Minutes: one of 0, 15, 30, 60
    pub massage_duration: i16,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Create product request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub observation: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub uses_capacity: bool,
    #[serde(default)]
    pub uses_massagist: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub baths: Vec<BathLine>,
}

/// Update product request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub observation: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub uses_capacity: Option<bool>,
    pub uses_massagist: Option<bool>,
    pub visible: Option<bool>,
    /// When present, replaces the whole bath composition
    pub baths: Option<Vec<BathLine>>,
}

fn default_true() -> bool {
    true
}

/// Allowed massage durations, in minutes
pub const MASSAGE_DURATIONS: [i16; 4] = [0, 15, 30, 60];

impl BathLine {
    /// Checks that the duration is one of the allowed choices
    pub fn validate_duration(&self) -> bool {
        MASSAGE_DURATIONS.contains(&self.massage_duration)
    }
}
