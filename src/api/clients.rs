//! Client endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::client::{Client, CreateClient, DuplicateQuery, UpdateClient},
};

/// List clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    responses(
        (status = 200, description = "Clients list", body = Vec<Client>)
    )
)]
pub async fn list_clients(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.services.clients.list().await?;
    Ok(Json(clients))
}

/// Get a client
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.get(id).await?;
    Ok(Json(client))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = Client)
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = state.services.clients.create(data).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = Client)
    )
)]
pub async fn update_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.update(id, data).await?;
    Ok(Json(client))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted")
    )
)]
pub async fn delete_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Find clients with the same phone or email
#[utoipa::path(
    get,
    path = "/clients/duplicates",
    tag = "clients",
    params(DuplicateQuery),
    responses(
        (status = 200, description = "Possible duplicates", body = Vec<Client>)
    )
)]
pub async fn find_duplicates(
    State(state): State<crate::AppState>,
    Query(query): Query<DuplicateQuery>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = state.services.clients.find_duplicates(&query).await?;
    Ok(Json(clients))
}
