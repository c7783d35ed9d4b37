//! Product endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::product::{CreateProduct, Product, ProductBath, UpdateProduct},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Include hidden (booking-specific) products
    #[serde(default)]
    pub include_hidden: bool,
}

/// List products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products list", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(state): State<crate::AppState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.services.products.list(query.include_hidden).await?;
    Ok(Json(products))
}

/// Get a product
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = state.services.products.get(id).await?;
    Ok(Json(product))
}

/// Bath composition of a product
#[utoipa::path(
    get,
    path = "/products/{id}/baths",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Bath composition", body = Vec<ProductBath>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_baths(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ProductBath>>> {
    let baths = state.services.products.baths(id).await?;
    Ok(Json(baths))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product)
    )
)]
pub async fn create_product(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.services.products.create(data).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product)
    )
)]
pub async fn update_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = state.services.products.update(id, data).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted")
    )
)]
pub async fn delete_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
