use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto},
        overview::{CreateOverviewDto, OverviewDto, UpdateOverviewDto},
    },
    error::AppError,
    model::overview::{CreateOverviewParams, UpdateOverviewParams},
    service::overview::OverviewService,
    state::AppState,
};

/// Tag for grouping overview endpoints in OpenAPI documentation
pub static OVERVIEW_TAG: &str = "overviews";

/// Get all overviews.
#[utoipa::path(
    get,
    path = "/api/v1/overviews",
    tag = OVERVIEW_TAG,
    responses(
        (status = 200, description = "All overviews", body = ResponseDto<Vec<OverviewDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_overviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OverviewService::new(&state.db);

    let overviews = service.get_overviews().await?;
    let dtos: Vec<OverviewDto> = overviews.into_iter().map(OverviewDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched overviews!", dtos)),
    ))
}

/// Get a single overview by id.
#[utoipa::path(
    get,
    path = "/api/v1/overviews/{id}",
    tag = OVERVIEW_TAG,
    params(("id" = i32, Path, description = "Overview id")),
    responses(
        (status = 200, description = "The overview", body = ResponseDto<OverviewDto>),
        (status = 404, description = "Overview does not exist", body = ErrorDto)
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    Path(overview_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OverviewService::new(&state.db);

    let overview = service.get_overview(overview_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Fetched overview!",
            OverviewDto::from(overview),
        )),
    ))
}

/// Create an overview.
#[utoipa::path(
    post,
    path = "/api/v1/overviews",
    tag = OVERVIEW_TAG,
    request_body = CreateOverviewDto,
    responses(
        (status = 201, description = "Overview created", body = ResponseDto<OverviewDto>),
        (status = 400, description = "Invalid overview data", body = ErrorDto)
    ),
)]
pub async fn create_overview(
    State(state): State<AppState>,
    Json(payload): Json<CreateOverviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OverviewService::new(&state.db);

    let params = CreateOverviewParams::from_dto(payload);
    let overview = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_response(
            "Created overview!",
            OverviewDto::from(overview),
        )),
    ))
}

/// Apply a partial overview update.
#[utoipa::path(
    patch,
    path = "/api/v1/overviews/{id}",
    tag = OVERVIEW_TAG,
    params(("id" = i32, Path, description = "Overview id")),
    request_body = UpdateOverviewDto,
    responses(
        (status = 200, description = "Overview updated", body = ResponseDto<OverviewDto>),
        (status = 404, description = "Overview does not exist", body = ErrorDto)
    ),
)]
pub async fn update_overview(
    State(state): State<AppState>,
    Path(overview_id): Path<i32>,
    Json(payload): Json<UpdateOverviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OverviewService::new(&state.db);

    let params = UpdateOverviewParams::from_dto(payload);
    let overview = service.update(overview_id, params).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Updated overview!",
            OverviewDto::from(overview),
        )),
    ))
}

/// Delete an overview.
#[utoipa::path(
    delete,
    path = "/api/v1/overviews/{id}",
    tag = OVERVIEW_TAG,
    params(("id" = i32, Path, description = "Overview id")),
    responses(
        (status = 200, description = "Overview deleted", body = ResponseDto<i32>),
        (status = 404, description = "Overview does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_overview(
    State(state): State<AppState>,
    Path(overview_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OverviewService::new(&state.db);

    let deleted_id = service.delete(overview_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Deleted overview!", deleted_id)),
    ))
}
