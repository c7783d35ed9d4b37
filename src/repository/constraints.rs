//! Booking constraints repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::constraint::{Constraint, ConstraintRange, ConstraintRow},
};

#[derive(Clone)]
pub struct ConstraintsRepository {
    pool: Pool<Postgres>,
}

impl ConstraintsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn ranges_for(&self, constraint_id: i32) -> AppResult<Vec<ConstraintRange>> {
        let rows = sqlx::query_as::<_, ConstraintRange>(
            r#"
            SELECT initial_time, end_time
            FROM constraint_ranges
            WHERE constraint_id = $1
            ORDER BY initial_time
            "#,
        )
        .bind(constraint_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn with_ranges(&self, row: ConstraintRow) -> AppResult<Constraint> {
        let ranges = self.ranges_for(row.id).await?;
        Ok(Constraint {
            id: row.id,
            day: row.day,
            created_at: row.created_at,
            ranges,
        })
    }

    /// List all constraints, ordered by date
    pub async fn list(&self) -> AppResult<Vec<Constraint>> {
        let rows = sqlx::query_as::<_, ConstraintRow>(
            "SELECT * FROM booking_constraints ORDER BY day"
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(self.with_ranges(row).await?);
        }
        Ok(result)
    }

    /// Get a constraint by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Constraint> {
        let row = sqlx::query_as::<_, ConstraintRow>(
            "SELECT * FROM booking_constraints WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchData, format!("Constraint {} not found", id)))?;
        self.with_ranges(row).await
    }

    /// Constraint of one date, if any (no weekday fallback in this subsystem)
    pub async fn find_by_day(&self, day: NaiveDate) -> AppResult<Option<Constraint>> {
        let row = sqlx::query_as::<_, ConstraintRow>(
            "SELECT * FROM booking_constraints WHERE day = $1"
        )
        .bind(day)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => Ok(Some(self.with_ranges(row).await?)),
            None => Ok(None),
        }
    }

    /// Create or replace the constraint of one date with the given ranges
    pub async fn upsert_for_day(
        &self,
        day: NaiveDate,
        ranges: &[ConstraintRange],
    ) -> AppResult<Constraint> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ConstraintRow>(
            r#"
            INSERT INTO booking_constraints (day)
            VALUES ($1)
            ON CONFLICT (day) DO UPDATE SET day = EXCLUDED.day
            RETURNING *
            "#,
        )
        .bind(day)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM constraint_ranges WHERE constraint_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        for range in ranges {
            sqlx::query(
                r#"
                INSERT INTO constraint_ranges (constraint_id, initial_time, end_time)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(row.id)
            .bind(range.initial_time)
            .bind(range.end_time)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.get_by_id(row.id).await
    }

    /// Delete a constraint by ID (cascade deletes its ranges)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM booking_constraints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchData, format!("Constraint {} not found", id)));
        }
        Ok(())
    }

    /// Delete the constraint of one date, if present; reports whether one existed
    pub async fn delete_by_day(&self, day: NaiveDate) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM booking_constraints WHERE day = $1")
            .bind(day)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
