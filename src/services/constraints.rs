//! Booking constraints service

use chrono::NaiveTime;

use crate::{
    error::{AppError, AppResult},
    models::constraint::{Constraint, ConstraintRange, SaveConstraint},
    repository::Repository,
    schedule::{self, Timeline},
};

#[derive(Clone)]
pub struct ConstraintsService {
    repository: Repository,
    timeline: Timeline,
}

impl ConstraintsService {
    pub fn new(repository: Repository, timeline: Timeline) -> Self {
        Self { repository, timeline }
    }

    pub async fn list(&self) -> AppResult<Vec<Constraint>> {
        self.repository.constraints.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Constraint> {
        self.repository.constraints.get_by_id(id).await
    }

    pub async fn get_for_day(&self, date: &str) -> AppResult<Option<Constraint>> {
        let day = super::parse_local_date(date)?;
        self.repository.constraints.find_by_day(day).await
    }

    /// Save one restricted flag per slot for a date.
    ///
    /// Only restricted runs are persisted; an all-open array deletes the
    /// date's constraint record entirely and returns `None`.
    pub async fn save_for_date(&self, data: SaveConstraint) -> AppResult<Option<Constraint>> {
        let day = super::parse_local_date(&data.date)?;
        if data.cells.len() != self.timeline.len() {
            return Err(AppError::Validation(format!(
                "expected {} cells, got {}",
                self.timeline.len(),
                data.cells.len()
            )));
        }

        let runs = schedule::encode(&data.cells, &self.timeline)?;
        let ranges: Vec<ConstraintRange> = runs
            .iter()
            .filter(|run| run.value)
            .map(|run| {
                Ok(ConstraintRange {
                    initial_time: parse_run_time(&run.initial_time)?,
                    end_time: parse_run_time(&run.end_time)?,
                })
            })
            .collect::<AppResult<_>>()?;

        if ranges.is_empty() {
            self.repository.constraints.delete_by_day(day).await?;
            return Ok(None);
        }

        let saved = self.repository.constraints.upsert_for_day(day, &ranges).await?;
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.constraints.delete(id).await
    }
}

fn parse_run_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|_| AppError::Internal(format!("malformed encoded boundary '{}'", s)))
}
