use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto},
        bug_report::{BugReportDto, CreateBugReportDto, UpdateBugReportDto},
    },
    error::AppError,
    model::bug_report::{CreateBugReportParams, UpdateBugReportParams},
    service::bug_report::BugReportService,
    state::AppState,
};

/// Tag for grouping bug report endpoints in OpenAPI documentation
pub static BUG_REPORT_TAG: &str = "bug-reports";

/// Get all bug reports.
#[utoipa::path(
    get,
    path = "/api/v1/bug-reports",
    tag = BUG_REPORT_TAG,
    responses(
        (status = 200, description = "All bug reports", body = ResponseDto<Vec<BugReportDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_bug_reports(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugReportService::new(&state.db);

    let reports = service.get_bug_reports().await?;
    let dtos: Vec<BugReportDto> = reports.into_iter().map(BugReportDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched bug reports!", dtos)),
    ))
}

/// Get a single bug report by id.
#[utoipa::path(
    get,
    path = "/api/v1/bug-reports/{id}",
    tag = BUG_REPORT_TAG,
    params(("id" = i32, Path, description = "Bug report id")),
    responses(
        (status = 200, description = "The bug report", body = ResponseDto<BugReportDto>),
        (status = 404, description = "Bug report does not exist", body = ErrorDto)
    ),
)]
pub async fn get_bug_report(
    State(state): State<AppState>,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugReportService::new(&state.db);

    let report = service.get_bug_report(report_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Fetched bug report!",
            BugReportDto::from(report),
        )),
    ))
}

/// File a bug report.
#[utoipa::path(
    post,
    path = "/api/v1/bug-reports",
    tag = BUG_REPORT_TAG,
    request_body = CreateBugReportDto,
    responses(
        (status = 201, description = "Bug report filed", body = ResponseDto<BugReportDto>),
        (status = 400, description = "Invalid bug report data", body = ErrorDto)
    ),
)]
pub async fn create_bug_report(
    State(state): State<AppState>,
    Json(payload): Json<CreateBugReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugReportService::new(&state.db);

    let params = CreateBugReportParams::from_dto(payload);
    let report = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_response(
            "Created bug report!",
            BugReportDto::from(report),
        )),
    ))
}

/// Amend a bug report.
#[utoipa::path(
    patch,
    path = "/api/v1/bug-reports/{id}",
    tag = BUG_REPORT_TAG,
    params(("id" = i32, Path, description = "Bug report id")),
    request_body = UpdateBugReportDto,
    responses(
        (status = 200, description = "Bug report updated", body = ResponseDto<BugReportDto>),
        (status = 404, description = "Bug report does not exist", body = ErrorDto)
    ),
)]
pub async fn update_bug_report(
    State(state): State<AppState>,
    Path(report_id): Path<i32>,
    Json(payload): Json<UpdateBugReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugReportService::new(&state.db);

    let params = UpdateBugReportParams::from_dto(payload);
    let report = service.update(report_id, params).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Updated bug report!",
            BugReportDto::from(report),
        )),
    ))
}

/// Delete a bug report.
#[utoipa::path(
    delete,
    path = "/api/v1/bug-reports/{id}",
    tag = BUG_REPORT_TAG,
    params(("id" = i32, Path, description = "Bug report id")),
    responses(
        (status = 200, description = "Bug report deleted", body = ResponseDto<i32>),
        (status = 404, description = "Bug report does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_bug_report(
    State(state): State<AppState>,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BugReportService::new(&state.db);

    let deleted_id = service.delete(report_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Deleted bug report!", deleted_id)),
    ))
}
