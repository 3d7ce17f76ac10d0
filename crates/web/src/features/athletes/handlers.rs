use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::athlete::{
        AthleteNamesResponse, AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest,
    },
    dto::common::PaginationQuery,
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

fn default_limit() -> i64 {
    100
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAthletesParams {
    /// Rows to skip
    #[serde(default)]
    pub offset: i64,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Case-insensitive substring filter on nome
    pub nome: Option<String>,
    /// Exact cpf filter
    pub cpf: Option<String>,
}

#[utoipa::path(
    post,
    path = "/atletas/",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or unknown categoria/centro de treinamento"),
        (status = 303, description = "An athlete with this cpf already exists"),
        (status = 500, description = "Unexpected persistence error")
    ),
    tag = "atletas"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/",
    params(ListAthletesParams),
    responses(
        (status = 200, description = "List athletes successfully", body = Vec<AthleteResponse>)
    ),
    tag = "atletas"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(params): Query<ListAthletesParams>,
) -> Result<Response, WebError> {
    let athletes = services::list_athletes(
        db.pool(),
        params.offset,
        params.limit,
        params.nome.as_deref(),
        params.cpf.as_deref(),
    )
    .await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/nomes/",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List athlete names with categoria and centro de treinamento", body = Vec<AthleteNamesResponse>)
    ),
    tag = "atletas"
)]
pub async fn list_athlete_names(
    State(db): State<Database>,
    Query(params): Query<PaginationQuery>,
) -> Result<Response, WebError> {
    let athletes =
        services::list_athletes(db.pool(), params.offset, params.limit, None, None).await?;

    let response: Vec<AthleteNamesResponse> = athletes
        .into_iter()
        .map(AthleteNamesResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    patch,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_athlete(db.pool(), id, &req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
