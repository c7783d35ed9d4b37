//! Booking endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::booking::{
        Booking, BookingDetail, BookingLog, CreateBooking, CreateBookingLog, UpdateBookingDetail,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingListQuery {
    /// Restrict the list to one date (YYYY-MM-DD)
    pub date: Option<String>,
}

/// List bookings, optionally for one date
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Bookings list", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = match query.date {
        Some(ref date) => state.services.bookings.list_by_date(date).await?,
        None => state.services.bookings.list().await?,
    };
    Ok(Json(bookings))
}

/// Booking detail with client data and bath composition
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = BookingDetail),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookingDetail>> {
    let detail = state.services.bookings.detail(id).await?;
    Ok(Json(detail))
}

/// Create a booking at the front desk
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = BookingDetail),
        (status = 422, description = "Capacity exceeded or slot restricted")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingDetail>)> {
    let detail = state.services.bookings.create(data).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Update a booking from the detail dialog
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingDetail,
    responses(
        (status = 200, description = "Booking updated", body = BookingDetail)
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBookingDetail>,
) -> AppResult<Json<BookingDetail>> {
    let detail = state.services.bookings.update_detail(id, data).await?;
    Ok(Json(detail))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Audit log of a booking
#[utoipa::path(
    get,
    path = "/bookings/{id}/logs",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Audit log entries", body = Vec<BookingLog>)
    )
)]
pub async fn list_booking_logs(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<BookingLog>>> {
    let logs = state.services.bookings.logs(id).await?;
    Ok(Json(logs))
}

/// Append a free-form audit log entry
#[utoipa::path(
    post,
    path = "/bookings/{id}/logs",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = CreateBookingLog,
    responses(
        (status = 201, description = "Log entry created", body = BookingLog)
    )
)]
pub async fn create_booking_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateBookingLog>,
) -> AppResult<(StatusCode, Json<BookingLog>)> {
    let log = state.services.bookings.add_log(id, &data.comment).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
