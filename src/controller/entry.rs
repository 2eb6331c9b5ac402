use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto},
        entry::{CreateEntryDto, EntryDto, EntryWithPurchasesDto, UpdateEntryDto},
    },
    error::AppError,
    model::entry::{CreateEntryOutcome, CreateEntryParams, UpdateEntryOutcome, UpdateEntryParams},
    service::entry::{EntryService, ENTRY_DOES_NOT_EXIST},
    state::AppState,
};

/// Tag for grouping entry endpoints in OpenAPI documentation
pub static ENTRY_TAG: &str = "entries";

fn duplicate_entry_message(name: &str) -> String {
    format!("An entry with name \"{name}\" already exists!")
}

/// Get all entries.
#[utoipa::path(
    get,
    path = "/api/v1/entries",
    tag = ENTRY_TAG,
    responses(
        (status = 200, description = "All entries", body = ResponseDto<Vec<EntryDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let entries = service.get_entries().await?;
    let dtos: Vec<EntryDto> = entries.into_iter().map(EntryDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched entries!", dtos)),
    ))
}

/// Get a single entry by id.
#[utoipa::path(
    get,
    path = "/api/v1/entries/{id}",
    tag = ENTRY_TAG,
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "The entry", body = ResponseDto<EntryDto>),
        (status = 404, description = "Entry does not exist", body = ErrorDto)
    ),
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let entry = service.get_entry(entry_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Fetched entry!",
            EntryDto::from(entry),
        )),
    ))
}

/// Get an overview's entries, each with its purchase ids ordered by placement.
#[utoipa::path(
    get,
    path = "/api/v1/entries/overview/{overview_id}",
    tag = ENTRY_TAG,
    params(("overview_id" = i32, Path, description = "Overview id")),
    responses(
        (status = 200, description = "The overview's entries", body = ResponseDto<Vec<EntryWithPurchasesDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_overview_entries(
    State(state): State<AppState>,
    Path(overview_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let entries = service.get_overview_entries(overview_id).await?;
    let dtos: Vec<EntryWithPurchasesDto> = entries
        .into_iter()
        .map(EntryWithPurchasesDto::from)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched overview entries!", dtos)),
    ))
}

/// Get a logbook's entries, each with its purchase ids ordered by placement.
#[utoipa::path(
    get,
    path = "/api/v1/entries/logbook/{logbook_id}",
    tag = ENTRY_TAG,
    params(("logbook_id" = i32, Path, description = "Logbook id")),
    responses(
        (status = 200, description = "The logbook's entries", body = ResponseDto<Vec<EntryWithPurchasesDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_logbook_entries(
    State(state): State<AppState>,
    Path(logbook_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let entries = service.get_logbook_entries(logbook_id).await?;
    let dtos: Vec<EntryWithPurchasesDto> = entries
        .into_iter()
        .map(EntryWithPurchasesDto::from)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched logbook entries!", dtos)),
    ))
}

/// Create an entry.
///
/// Runs the scoped duplicate-name pre-check, then inserts the entry together
/// with its single empty companion purchase.
///
/// # Returns
/// - `201 Created` - Entry and companion purchase created
/// - `400 Bad Request` - The parent already holds an entry with this name
#[utoipa::path(
    post,
    path = "/api/v1/entries",
    tag = ENTRY_TAG,
    request_body = CreateEntryDto,
    responses(
        (status = 201, description = "Entry created", body = ResponseDto<EntryWithPurchasesDto>),
        (status = 400, description = "Duplicate entry name", body = ErrorDto)
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let params = CreateEntryParams::from_dto(payload);

    match service.create(params).await? {
        CreateEntryOutcome::Created(entry) => Ok((
            StatusCode::CREATED,
            Json(ResponseDto::with_response(
                "Created entry!",
                EntryWithPurchasesDto::from(entry),
            )),
        )),
        CreateEntryOutcome::DuplicateName(name) => {
            Err(AppError::BadRequest(duplicate_entry_message(&name)))
        }
    }
}

/// Apply a partial entry update.
#[utoipa::path(
    patch,
    path = "/api/v1/entries/{id}",
    tag = ENTRY_TAG,
    params(("id" = i32, Path, description = "Entry id")),
    request_body = UpdateEntryDto,
    responses(
        (status = 200, description = "Entry updated", body = ResponseDto<EntryWithPurchasesDto>),
        (status = 400, description = "Duplicate entry name", body = ErrorDto),
        (status = 404, description = "Entry does not exist", body = ErrorDto)
    ),
)]
pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
    Json(payload): Json<UpdateEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let params = UpdateEntryParams::from_dto(payload);

    match service.update(entry_id, params).await? {
        UpdateEntryOutcome::Updated(entry) => Ok((
            StatusCode::OK,
            Json(ResponseDto::with_response(
                "Updated entry!",
                EntryWithPurchasesDto::from(entry),
            )),
        )),
        UpdateEntryOutcome::DuplicateName(name) => {
            Err(AppError::BadRequest(duplicate_entry_message(&name)))
        }
        UpdateEntryOutcome::NotFound => Err(AppError::NotFound(ENTRY_DOES_NOT_EXIST.to_string())),
    }
}

/// Delete an entry.
#[utoipa::path(
    delete,
    path = "/api/v1/entries/{id}",
    tag = ENTRY_TAG,
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry deleted", body = ResponseDto<i32>),
        (status = 404, description = "Entry does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EntryService::new(&state.db);

    let deleted_id = service.delete(entry_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Deleted entry!", deleted_id)),
    ))
}
