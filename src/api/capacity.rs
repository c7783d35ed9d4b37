//! Venue capacity endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::capacity::{Capacity, UpdateCapacity},
};

/// Get the venue capacity
#[utoipa::path(
    get,
    path = "/capacity",
    tag = "capacity",
    responses(
        (status = 200, description = "Current capacity", body = Capacity),
        (status = 404, description = "Capacity not configured")
    )
)]
pub async fn get_capacity(State(state): State<crate::AppState>) -> AppResult<Json<Capacity>> {
    let capacity = state.services.capacity.get().await?;
    Ok(Json(capacity))
}

/// Update the venue capacity
#[utoipa::path(
    put,
    path = "/capacity",
    tag = "capacity",
    request_body = UpdateCapacity,
    responses(
        (status = 200, description = "Capacity updated", body = Capacity)
    )
)]
pub async fn update_capacity(
    State(state): State<crate::AppState>,
    Json(data): Json<UpdateCapacity>,
) -> AppResult<Json<Capacity>> {
    let capacity = state.services.capacity.update(data.value).await?;
    Ok(Json(capacity))
}
