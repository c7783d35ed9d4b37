//! Venue capacity service

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::capacity::Capacity,
    repository::Repository,
};

#[derive(Clone)]
pub struct CapacityService {
    repository: Repository,
}

impl CapacityService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The singleton capacity record; not configured is an error
    pub async fn get(&self) -> AppResult<Capacity> {
        self.repository
            .capacity
            .get()
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::CapacityMissing,
                    "Capacity is not configured".to_string(),
                )
            })
    }

    pub async fn update(&self, value: i32) -> AppResult<Capacity> {
        if value < 0 {
            return Err(AppError::Validation(
                "capacity must not be negative".to_string(),
            ));
        }
        let current = self.get().await?;
        self.repository.capacity.update(current.id, value).await
    }
}
