//! Clients service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, CreateClient, DuplicateQuery, UpdateClient},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Client>> {
        self.repository.clients.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateClient) -> AppResult<Client> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.clients.create(&data).await
    }

    pub async fn update(&self, id: i32, data: UpdateClient) -> AppResult<Client> {
        self.repository.clients.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.clients.delete(id).await
    }

    /// Clients that look like duplicates of the given contact data.
    ///
    /// Staff check this before registering a walk-in as a new client.
    pub async fn find_duplicates(&self, query: &DuplicateQuery) -> AppResult<Vec<Client>> {
        if query.phone.is_none() && query.email.is_none() {
            return Err(AppError::Validation(
                "provide a phone or an email to search for".to_string(),
            ));
        }
        self.repository
            .clients
            .find_duplicates(query.phone.as_deref(), query.email.as_deref())
            .await
    }
}
