//! Client model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A spa client
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: i32,
    /// First name
    pub name: String,
    /// Family name
    pub surname: Option<String>,
    /// Contact phone, digits with optional country prefix
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub surname: Option<String>,
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// Update client request (all fields optional)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// Query parameters for duplicate client detection
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DuplicateQuery {
    /// Exact phone number to match
    pub phone: Option<String>,
    /// Email to match (case-insensitive)
    pub email: Option<String>,
}
