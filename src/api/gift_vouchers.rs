//! Gift voucher endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::gift_voucher::{CreateGiftVoucher, GiftVoucher, UpdateGiftVoucher},
};

/// List gift vouchers
#[utoipa::path(
    get,
    path = "/gift-vouchers",
    tag = "gift-vouchers",
    responses(
        (status = 200, description = "Vouchers list", body = Vec<GiftVoucher>)
    )
)]
pub async fn list_vouchers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<GiftVoucher>>> {
    let vouchers = state.services.gift_vouchers.list().await?;
    Ok(Json(vouchers))
}

/// Get a gift voucher
#[utoipa::path(
    get,
    path = "/gift-vouchers/{id}",
    tag = "gift-vouchers",
    params(("id" = i32, Path, description = "Voucher ID")),
    responses(
        (status = 200, description = "Voucher details", body = GiftVoucher),
        (status = 404, description = "Voucher not found")
    )
)]
pub async fn get_voucher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GiftVoucher>> {
    let voucher = state.services.gift_vouchers.get(id).await?;
    Ok(Json(voucher))
}

/// Create a gift voucher; the code is generated when omitted
#[utoipa::path(
    post,
    path = "/gift-vouchers",
    tag = "gift-vouchers",
    request_body = CreateGiftVoucher,
    responses(
        (status = 201, description = "Voucher created", body = GiftVoucher),
        (status = 409, description = "Code already taken")
    )
)]
pub async fn create_voucher(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateGiftVoucher>,
) -> AppResult<(StatusCode, Json<GiftVoucher>)> {
    let voucher = state.services.gift_vouchers.create(data).await?;
    Ok((StatusCode::CREATED, Json(voucher)))
}

/// Update a gift voucher
#[utoipa::path(
    put,
    path = "/gift-vouchers/{id}",
    tag = "gift-vouchers",
    params(("id" = i32, Path, description = "Voucher ID")),
    request_body = UpdateGiftVoucher,
    responses(
        (status = 200, description = "Voucher updated", body = GiftVoucher)
    )
)]
pub async fn update_voucher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateGiftVoucher>,
) -> AppResult<Json<GiftVoucher>> {
    let voucher = state.services.gift_vouchers.update(id, data).await?;
    Ok(Json(voucher))
}

/// Redeem a gift voucher
#[utoipa::path(
    post,
    path = "/gift-vouchers/{id}/use",
    tag = "gift-vouchers",
    params(("id" = i32, Path, description = "Voucher ID")),
    responses(
        (status = 200, description = "Voucher redeemed", body = GiftVoucher),
        (status = 422, description = "Voucher already used")
    )
)]
pub async fn use_voucher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GiftVoucher>> {
    let voucher = state.services.gift_vouchers.use_voucher(id).await?;
    Ok(Json(voucher))
}

/// Delete a gift voucher
#[utoipa::path(
    delete,
    path = "/gift-vouchers/{id}",
    tag = "gift-vouchers",
    params(("id" = i32, Path, description = "Voucher ID")),
    responses(
        (status = 204, description = "Voucher deleted")
    )
)]
pub async fn delete_voucher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.gift_vouchers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
