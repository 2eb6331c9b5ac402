use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto},
        logbook::{CreateLogbookDto, LogbookDto, UpdateLogbookDto},
    },
    error::AppError,
    model::logbook::{CreateLogbookOutcome, CreateLogbookParams, UpdateLogbookOutcome},
    service::logbook::{LogbookService, LOGBOOK_DOES_NOT_EXIST},
    state::AppState,
};

/// Tag for grouping logbook endpoints in OpenAPI documentation
pub static LOGBOOK_TAG: &str = "logbooks";

fn duplicate_logbook_message(name: &str) -> String {
    format!("A logbook with name \"{name}\" already exists!")
}

/// Get all logbooks.
#[utoipa::path(
    get,
    path = "/api/v1/logbooks",
    tag = LOGBOOK_TAG,
    responses(
        (status = 200, description = "All logbooks", body = ResponseDto<Vec<LogbookDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_logbooks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = LogbookService::new(&state.db);

    let logbooks = service.get_logbooks().await?;
    let dtos: Vec<LogbookDto> = logbooks.into_iter().map(LogbookDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched logbooks!", dtos)),
    ))
}

/// Get a single logbook by id.
#[utoipa::path(
    get,
    path = "/api/v1/logbooks/{id}",
    tag = LOGBOOK_TAG,
    params(("id" = i32, Path, description = "Logbook id")),
    responses(
        (status = 200, description = "The logbook", body = ResponseDto<LogbookDto>),
        (status = 404, description = "Logbook does not exist", body = ErrorDto)
    ),
)]
pub async fn get_logbook(
    State(state): State<AppState>,
    Path(logbook_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogbookService::new(&state.db);

    let logbook = service.get_logbook(logbook_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Fetched logbook!",
            LogbookDto::from(logbook),
        )),
    ))
}

/// Get all logbooks owned by a user.
#[utoipa::path(
    get,
    path = "/api/v1/logbooks/user/{user_id}",
    tag = LOGBOOK_TAG,
    params(("user_id" = i32, Path, description = "Owner's user id")),
    responses(
        (status = 200, description = "The user's logbooks", body = ResponseDto<Vec<LogbookDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_user_logbooks(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogbookService::new(&state.db);

    let logbooks = service.get_user_logbooks(user_id).await?;
    let dtos: Vec<LogbookDto> = logbooks.into_iter().map(LogbookDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched logbooks!", dtos)),
    ))
}

/// Create a logbook.
///
/// # Returns
/// - `201 Created` - Logbook created
/// - `400 Bad Request` - The owner already has a logbook with this name
#[utoipa::path(
    post,
    path = "/api/v1/logbooks",
    tag = LOGBOOK_TAG,
    request_body = CreateLogbookDto,
    responses(
        (status = 201, description = "Logbook created", body = ResponseDto<LogbookDto>),
        (status = 400, description = "Duplicate logbook name", body = ErrorDto)
    ),
)]
pub async fn create_logbook(
    State(state): State<AppState>,
    Json(payload): Json<CreateLogbookDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogbookService::new(&state.db);

    let params = CreateLogbookParams {
        name: payload.name,
        owner_id: payload.owner_id,
    };

    match service.create(params).await? {
        CreateLogbookOutcome::Created(logbook) => Ok((
            StatusCode::CREATED,
            Json(ResponseDto::with_response(
                "Created logbook!",
                LogbookDto::from(logbook),
            )),
        )),
        CreateLogbookOutcome::DuplicateName(name) => {
            Err(AppError::BadRequest(duplicate_logbook_message(&name)))
        }
    }
}

/// Rename a logbook.
#[utoipa::path(
    patch,
    path = "/api/v1/logbooks/{id}",
    tag = LOGBOOK_TAG,
    params(("id" = i32, Path, description = "Logbook id")),
    request_body = UpdateLogbookDto,
    responses(
        (status = 200, description = "Logbook updated", body = ResponseDto<LogbookDto>),
        (status = 400, description = "Duplicate logbook name", body = ErrorDto),
        (status = 404, description = "Logbook does not exist", body = ErrorDto)
    ),
)]
pub async fn update_logbook(
    State(state): State<AppState>,
    Path(logbook_id): Path<i32>,
    Json(payload): Json<UpdateLogbookDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogbookService::new(&state.db);

    match service.update(logbook_id, payload.name).await? {
        UpdateLogbookOutcome::Updated(logbook) => Ok((
            StatusCode::OK,
            Json(ResponseDto::with_response(
                "Updated logbook!",
                LogbookDto::from(logbook),
            )),
        )),
        UpdateLogbookOutcome::DuplicateName(name) => {
            Err(AppError::BadRequest(duplicate_logbook_message(&name)))
        }
        UpdateLogbookOutcome::NotFound => {
            Err(AppError::NotFound(LOGBOOK_DOES_NOT_EXIST.to_string()))
        }
    }
}

/// Delete a logbook.
#[utoipa::path(
    delete,
    path = "/api/v1/logbooks/{id}",
    tag = LOGBOOK_TAG,
    params(("id" = i32, Path, description = "Logbook id")),
    responses(
        (status = 200, description = "Logbook deleted", body = ResponseDto<i32>),
        (status = 404, description = "Logbook does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_logbook(
    State(state): State<AppState>,
    Path(logbook_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogbookService::new(&state.db);

    let deleted_id = service.delete(logbook_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Deleted logbook!", deleted_id)),
    ))
}
