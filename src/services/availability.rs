//! Massagist availability service

use chrono::{Datelike, NaiveTime};

use crate::{
    error::{AppError, AppResult},
    models::availability::{
        Availability, AvailabilityKind, AvailabilityRange, SaveAvailability, SaveDayAvailability,
        SaveWeekdayAvailability,
    },
    repository::Repository,
    schedule::{self, RawRange, Timeline},
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    timeline: Timeline,
}

impl AvailabilityService {
    pub fn new(repository: Repository, timeline: Timeline) -> Self {
        Self { repository, timeline }
    }

    pub async fn list(&self) -> AppResult<Vec<Availability>> {
        self.repository.availability.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Availability> {
        self.repository.availability.get_by_id(id).await
    }

    /// The record governing one date: punctual override first, weekday
    /// default second, none otherwise
    pub async fn get_for_day(&self, date: &str) -> AppResult<Option<Availability>> {
        let day = super::parse_local_date(date)?;
        if let Some(punctual) = self.repository.availability.find_punctual(day).await? {
            return Ok(Some(punctual));
        }
        let weekday = day.weekday().number_from_monday() as i16;
        self.repository.availability.find_weekday(weekday).await
    }

    pub async fn create(&self, data: SaveAvailability) -> AppResult<Availability> {
        data.validate().map_err(AppError::Validation)?;
        self.repository.availability.create(&data).await
    }

    pub async fn update(&self, id: i32, data: SaveAvailability) -> AppResult<Availability> {
        data.validate().map_err(AppError::Validation)?;
        self.repository.availability.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.availability.delete(id).await
    }

    /// Save the full cell array of one date as its punctual record.
    ///
    /// Creates the record if the date has none yet, replaces its ranges
    /// otherwise. The weekday default of that date is left untouched.
    pub async fn save_for_date(&self, data: SaveDayAvailability) -> AppResult<Availability> {
        let day = super::parse_local_date(&data.date)?;
        let ranges = self.cells_to_ranges(&data.cells)?;

        let save = SaveAvailability {
            kind: AvailabilityKind::Punctual,
            punctual_day: Some(day),
            weekday: None,
            ranges,
        };

        match self.repository.availability.find_punctual(day).await? {
            Some(existing) => self.repository.availability.update(existing.id, &save).await,
            None => self.repository.availability.create(&save).await,
        }
    }

    /// Save the full cell array of one ISO weekday (1=Monday..7=Sunday)
    pub async fn save_for_weekday(&self, data: SaveWeekdayAvailability) -> AppResult<Availability> {
        if !(1..=7).contains(&data.weekday) {
            return Err(AppError::Validation(
                "weekday must be between 1 (Monday) and 7 (Sunday)".to_string(),
            ));
        }
        let ranges = self.cells_to_ranges(&data.cells)?;

        let save = SaveAvailability {
            kind: AvailabilityKind::Weekday,
            punctual_day: None,
            weekday: Some(data.weekday),
            ranges,
        };

        match self.repository.availability.find_weekday(data.weekday).await? {
            Some(existing) => self.repository.availability.update(existing.id, &save).await,
            None => self.repository.availability.create(&save).await,
        }
    }

    /// Encode one cell per slot into stored ranges. Zero-massagist runs are
    /// stored too, so a saved array round-trips exactly.
    fn cells_to_ranges(&self, cells: &[i32]) -> AppResult<Vec<AvailabilityRange>> {
        for &cell in cells {
            if cell < 0 {
                return Err(AppError::Validation(
                    "massagist counts must not be negative".to_string(),
                ));
            }
        }

        let runs = schedule::encode(cells, &self.timeline)?;
        runs.iter().map(range_from_run).collect()
    }
}

fn range_from_run(run: &RawRange<i32>) -> AppResult<AvailabilityRange> {
    Ok(AvailabilityRange {
        initial_time: parse_run_time(&run.initial_time)?,
        end_time: parse_run_time(&run.end_time)?,
        massagists_availability: run.value,
    })
}

fn parse_run_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|_| AppError::Internal(format!("malformed encoded boundary '{}'", s)))
}
