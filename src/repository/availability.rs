//! Massagist availability repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::availability::{Availability, AvailabilityRange, AvailabilityRow, SaveAvailability},
};

#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: Pool<Postgres>,
}

impl AvailabilityRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn ranges_for(&self, availability_id: i32) -> AppResult<Vec<AvailabilityRange>> {
        let rows = sqlx::query_as::<_, AvailabilityRange>(
            r#"
            SELECT initial_time, end_time, massagists_availability
            FROM availability_ranges
            WHERE availability_id = $1
            ORDER BY initial_time
            "#,
        )
        .bind(availability_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn with_ranges(&self, row: AvailabilityRow) -> AppResult<Availability> {
        let ranges = self.ranges_for(row.id).await?;
        Ok(Availability {
            id: row.id,
            kind: row.kind,
            punctual_day: row.punctual_day,
            weekday: row.weekday,
            created_at: row.created_at,
            ranges,
        })
    }

    /// List all availability records with their ranges
    pub async fn list(&self) -> AppResult<Vec<Availability>> {
        let rows = sqlx::query_as::<_, AvailabilityRow>(
            "SELECT * FROM availabilities ORDER BY kind, weekday, punctual_day"
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(self.with_ranges(row).await?);
        }
        Ok(result)
    }

    /// Get an availability record by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Availability> {
        let row = sqlx::query_as::<_, AvailabilityRow>(
            "SELECT * FROM availabilities WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchData, format!("Availability {} not found", id)))?;
        self.with_ranges(row).await
    }

    /// Punctual record for an exact date, if any
    pub async fn find_punctual(&self, day: NaiveDate) -> AppResult<Option<Availability>> {
        let row = sqlx::query_as::<_, AvailabilityRow>(
            "SELECT * FROM availabilities WHERE kind = 'punctual' AND punctual_day = $1"
        )
        .bind(day)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => Ok(Some(self.with_ranges(row).await?)),
            None => Ok(None),
        }
    }

    /// Weekday default record (ISO weekday 1=Monday..7=Sunday), if any
    pub async fn find_weekday(&self, weekday: i16) -> AppResult<Option<Availability>> {
        let row = sqlx::query_as::<_, AvailabilityRow>(
            "SELECT * FROM availabilities WHERE kind = 'weekday' AND weekday = $1"
        )
        .bind(weekday)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => Ok(Some(self.with_ranges(row).await?)),
            None => Ok(None),
        }
    }

    /// Create an availability record with its ranges
    pub async fn create(&self, data: &SaveAvailability) -> AppResult<Availability> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, AvailabilityRow>(
            r#"
            INSERT INTO availabilities (kind, punctual_day, weekday)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(data.kind)
        .bind(data.punctual_day)
        .bind(data.weekday)
        .fetch_one(&mut *tx)
        .await?;

        for range in &data.ranges {
            sqlx::query(
                r#"
                INSERT INTO availability_ranges
                    (availability_id, initial_time, end_time, massagists_availability)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(row.id)
            .bind(range.initial_time)
            .bind(range.end_time)
            .bind(range.massagists_availability)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.get_by_id(row.id).await
    }

    /// Update an availability record, replacing all its ranges
    pub async fn update(&self, id: i32, data: &SaveAvailability) -> AppResult<Availability> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE availabilities
            SET kind = $2,
                punctual_day = CASE WHEN $2 = 'punctual'::availability_kind THEN $3 ELSE NULL END,
                weekday = CASE WHEN $2 = 'weekday'::availability_kind THEN $4 ELSE NULL END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.kind)
        .bind(data.punctual_day)
        .bind(data.weekday)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchData, format!("Availability {} not found", id)));
        }

        sqlx::query("DELETE FROM availability_ranges WHERE availability_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for range in &data.ranges {
            sqlx::query(
                r#"
                INSERT INTO availability_ranges
                    (availability_id, initial_time, end_time, massagists_availability)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(range.initial_time)
            .bind(range.end_time)
            .bind(range.massagists_availability)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.get_by_id(id).await
    }

    /// Delete an availability record (cascade deletes its ranges)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM availabilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchData, format!("Availability {} not found", id)));
        }
        Ok(())
    }
}
