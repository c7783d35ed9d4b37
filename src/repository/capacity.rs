//! Venue capacity repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::capacity::Capacity,
};

#[derive(Clone)]
pub struct CapacityRepository {
    pool: Pool<Postgres>,
}

impl CapacityRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// The singleton capacity record, if configured
    pub async fn get(&self) -> AppResult<Option<Capacity>> {
        let row = sqlx::query_as::<_, Capacity>(
            "SELECT * FROM capacity ORDER BY id LIMIT 1"
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the capacity value
    pub async fn update(&self, id: i32, value: i32) -> AppResult<Capacity> {
        sqlx::query_as::<_, Capacity>(
            "UPDATE capacity SET value = $2 WHERE id = $1 RETURNING *"
        )
        .bind(id)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchData, format!("Capacity record {} not found", id)))
    }
}
