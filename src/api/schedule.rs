//! Daily schedule grid endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::schedule::DaySchedule};

/// Full schedule grid for one date
#[utoipa::path(
    get,
    path = "/schedule/{date}",
    tag = "schedule",
    params(("date" = String, Path, description = "Date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Per-slot occupancy and availability", body = DaySchedule),
        (status = 400, description = "Malformed date or capacity not configured")
    )
)]
pub async fn get_day_schedule(
    State(state): State<crate::AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DaySchedule>> {
    let schedule = state.services.schedule.day_schedule(&date).await?;
    Ok(Json(schedule))
}
