//! Clients repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::client::{Client, CreateClient, UpdateClient},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all clients, newest first
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchClient, format!("Client {} not found", id)))
    }

    /// Create a client
    pub async fn create(&self, data: &CreateClient) -> AppResult<Client> {
        let row = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, surname, phone_number, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.phone_number)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a client (only provided fields)
    pub async fn update(&self, id: i32, data: &UpdateClient) -> AppResult<Client> {
        let mut sets = Vec::new();
        let mut idx = 1;

        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.surname.is_some() { sets.push(format!("surname = ${}", idx)); idx += 1; }
        if data.phone_number.is_some() { sets.push(format!("phone_number = ${}", idx)); idx += 1; }
        if data.email.is_some() { sets.push(format!("email = ${}", idx)); }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!("UPDATE clients SET {} WHERE id = {} RETURNING *", sets.join(", "), id);

        let mut builder = sqlx::query_as::<_, Client>(&query);
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(ref surname) = data.surname { builder = builder.bind(surname); }
        if let Some(ref phone) = data.phone_number { builder = builder.bind(phone); }
        if let Some(ref email) = data.email { builder = builder.bind(email); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchClient, format!("Client {} not found", id)))
    }

    /// Delete a client
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchClient, format!("Client {} not found", id)));
        }
        Ok(())
    }

    /// Find clients matching an exact phone or a case-insensitive email.
    ///
    /// Used by duplicate detection before creating a new client.
    pub async fn find_duplicates(
        &self,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE ($1::text IS NOT NULL AND phone_number = $1)
               OR ($2::text IS NOT NULL AND LOWER(email) = LOWER($2))
            ORDER BY created_at DESC
            "#,
        )
        .bind(phone)
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
