//! Booking constraint endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::constraint::{Constraint, ConstraintDeleted, SaveConstraint},
};

/// Result of saving a day's restriction grid
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SaveConstraintResponse {
    /// At least one slot is restricted
    Saved(Constraint),
    /// All slots open: the day's record was removed
    Deleted(ConstraintDeleted),
}

/// List constraints
#[utoipa::path(
    get,
    path = "/constraints",
    tag = "constraints",
    responses(
        (status = 200, description = "Constraints list", body = Vec<Constraint>)
    )
)]
pub async fn list_constraints(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Constraint>>> {
    let constraints = state.services.constraints.list().await?;
    Ok(Json(constraints))
}

/// Get a constraint
#[utoipa::path(
    get,
    path = "/constraints/{id}",
    tag = "constraints",
    params(("id" = i32, Path, description = "Constraint ID")),
    responses(
        (status = 200, description = "Constraint details", body = Constraint),
        (status = 404, description = "Constraint not found")
    )
)]
pub async fn get_constraint(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Constraint>> {
    let constraint = state.services.constraints.get(id).await?;
    Ok(Json(constraint))
}

/// The constraint of one date, if any
#[utoipa::path(
    get,
    path = "/constraints/by-date/{date}",
    tag = "constraints",
    params(("date" = String, Path, description = "Date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Constraint, null when the date has none", body = Constraint)
    )
)]
pub async fn get_constraint_for_day(
    State(state): State<crate::AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Option<Constraint>>> {
    let constraint = state.services.constraints.get_for_day(&date).await?;
    Ok(Json(constraint))
}

/// Save the restriction grid of one date
#[utoipa::path(
    post,
    path = "/constraints/day",
    tag = "constraints",
    request_body = SaveConstraint,
    responses(
        (status = 200, description = "Constraint saved or removed", body = SaveConstraintResponse)
    )
)]
pub async fn save_day_constraint(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveConstraint>,
) -> AppResult<Json<SaveConstraintResponse>> {
    let date = data.date.clone();
    let response = match state.services.constraints.save_for_date(data).await? {
        Some(constraint) => SaveConstraintResponse::Saved(constraint),
        None => SaveConstraintResponse::Deleted(ConstraintDeleted {
            detail: format!("all slots open, constraint for {} removed", date),
        }),
    };
    Ok(Json(response))
}

/// Delete a constraint
#[utoipa::path(
    delete,
    path = "/constraints/{id}",
    tag = "constraints",
    params(("id" = i32, Path, description = "Constraint ID")),
    responses(
        (status = 204, description = "Constraint deleted")
    )
)]
pub async fn delete_constraint(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.constraints.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
