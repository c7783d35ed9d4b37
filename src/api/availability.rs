//! Massagist availability endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::availability::{
        Availability, SaveAvailability, SaveDayAvailability, SaveWeekdayAvailability,
    },
};

/// List availability records
#[utoipa::path(
    get,
    path = "/availability",
    tag = "availability",
    responses(
        (status = 200, description = "Availability records", body = Vec<Availability>)
    )
)]
pub async fn list_availability(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Availability>>> {
    let records = state.services.availability.list().await?;
    Ok(Json(records))
}

/// Get an availability record
#[utoipa::path(
    get,
    path = "/availability/{id}",
    tag = "availability",
    params(("id" = i32, Path, description = "Availability ID")),
    responses(
        (status = 200, description = "Availability record", body = Availability),
        (status = 404, description = "Record not found")
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Availability>> {
    let record = state.services.availability.get(id).await?;
    Ok(Json(record))
}

/// The record governing one date (punctual override or weekday default)
#[utoipa::path(
    get,
    path = "/availability/by-date/{date}",
    tag = "availability",
    params(("date" = String, Path, description = "Date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Governing record, null when the date has none", body = Availability)
    )
)]
pub async fn get_availability_for_day(
    State(state): State<crate::AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Option<Availability>>> {
    let record = state.services.availability.get_for_day(&date).await?;
    Ok(Json(record))
}

/// Create an availability record
#[utoipa::path(
    post,
    path = "/availability",
    tag = "availability",
    request_body = SaveAvailability,
    responses(
        (status = 201, description = "Record created", body = Availability)
    )
)]
pub async fn create_availability(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveAvailability>,
) -> AppResult<(StatusCode, Json<Availability>)> {
    let record = state.services.availability.create(data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update an availability record, replacing its ranges
#[utoipa::path(
    put,
    path = "/availability/{id}",
    tag = "availability",
    params(("id" = i32, Path, description = "Availability ID")),
    request_body = SaveAvailability,
    responses(
        (status = 200, description = "Record updated", body = Availability)
    )
)]
pub async fn update_availability(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<SaveAvailability>,
) -> AppResult<Json<Availability>> {
    let record = state.services.availability.update(id, data).await?;
    Ok(Json(record))
}

/// Save the editor grid of one date as its punctual record
#[utoipa::path(
    post,
    path = "/availability/day",
    tag = "availability",
    request_body = SaveDayAvailability,
    responses(
        (status = 200, description = "Punctual record saved", body = Availability)
    )
)]
pub async fn save_day_availability(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveDayAvailability>,
) -> AppResult<Json<Availability>> {
    let record = state.services.availability.save_for_date(data).await?;
    Ok(Json(record))
}

/// Save the editor grid of one weekday as its default record
#[utoipa::path(
    post,
    path = "/availability/weekday",
    tag = "availability",
    request_body = SaveWeekdayAvailability,
    responses(
        (status = 200, description = "Weekday record saved", body = Availability)
    )
)]
pub async fn save_weekday_availability(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveWeekdayAvailability>,
) -> AppResult<Json<Availability>> {
    let record = state.services.availability.save_for_weekday(data).await?;
    Ok(Json(record))
}

/// Delete an availability record
#[utoipa::path(
    delete,
    path = "/availability/{id}",
    tag = "availability",
    params(("id" = i32, Path, description = "Availability ID")),
    responses(
        (status = 204, description = "Record deleted")
    )
)]
pub async fn delete_availability(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.availability.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
