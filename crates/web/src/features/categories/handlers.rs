use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryResponse, CreateCategoryRequest},
    dto::common::PaginationQuery,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/categorias/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Categoria created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 303, description = "A categoria with this nome already exists")
    ),
    tag = "categorias"
)]
pub async fn create_category(
    State(db): State<Database>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    get,
    path = "/categorias/",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List categorias successfully", body = Vec<CategoryResponse>)
    ),
    tag = "categorias"
)]
pub async fn list_categories(
    State(db): State<Database>,
    Query(params): Query<PaginationQuery>,
) -> Result<Response, WebError> {
    let categories = services::list_categories(db.pool(), params.offset, params.limit).await?;

    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Categoria id")
    ),
    responses(
        (status = 200, description = "Categoria found", body = CategoryResponse),
        (status = 404, description = "Categoria not found")
    ),
    tag = "categorias"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let category = services::get_category(db.pool(), id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}
