//! Venue capacity model (singleton record)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Venue-wide simultaneous occupancy limit.
///
/// A single row; the schedule calculation refuses to run without it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Capacity {
    pub id: i32,
    pub value: i32,
}

/// Update capacity request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCapacity {
    pub value: i32,
}
