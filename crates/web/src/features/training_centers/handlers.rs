use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::PaginationQuery,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/centros_treinamento/",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Centro de treinamento created successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 303, description = "A centro de treinamento with this nome already exists")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TrainingCenterResponse::from(center)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List centros de treinamento successfully", body = Vec<TrainingCenterResponse>)
    ),
    tag = "centros_treinamento"
)]
pub async fn list_training_centers(
    State(db): State<Database>,
    Query(params): Query<PaginationQuery>,
) -> Result<Response, WebError> {
    let centers =
        services::list_training_centers(db.pool(), params.offset, params.limit).await?;

    let response: Vec<TrainingCenterResponse> = centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Centro de treinamento id")
    ),
    responses(
        (status = 200, description = "Centro de treinamento found", body = TrainingCenterResponse),
        (status = 404, description = "Centro de treinamento not found")
    ),
    tag = "centros_treinamento"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(db.pool(), id).await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}
