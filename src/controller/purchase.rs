use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto},
        purchase::{BulkDeletePurchasesDto, CreatePurchaseDto, PurchaseDto, UpdatePurchaseDto},
    },
    error::AppError,
    model::purchase::{CreatePurchaseParams, UpdatePurchaseParams},
    service::purchase::PurchaseService,
    state::AppState,
};

/// Tag for grouping purchase endpoints in OpenAPI documentation
pub static PURCHASE_TAG: &str = "purchases";

/// Get all purchases.
#[utoipa::path(
    get,
    path = "/api/v1/purchases",
    tag = PURCHASE_TAG,
    responses(
        (status = 200, description = "All purchases", body = ResponseDto<Vec<PurchaseDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_purchases(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let purchases = service.get_purchases().await?;
    let dtos: Vec<PurchaseDto> = purchases.into_iter().map(PurchaseDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched purchases!", dtos)),
    ))
}

/// Get a single purchase by id.
#[utoipa::path(
    get,
    path = "/api/v1/purchases/{id}",
    tag = PURCHASE_TAG,
    params(("id" = i32, Path, description = "Purchase id")),
    responses(
        (status = 200, description = "The purchase", body = ResponseDto<PurchaseDto>),
        (status = 404, description = "Purchase does not exist", body = ErrorDto)
    ),
)]
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let purchase = service.get_purchase(purchase_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Fetched purchase!",
            PurchaseDto::from(purchase),
        )),
    ))
}

/// Get an entry's purchases ordered by placement ascending.
#[utoipa::path(
    get,
    path = "/api/v1/purchases/entry/{entry_id}",
    tag = PURCHASE_TAG,
    params(("entry_id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "The entry's purchases", body = ResponseDto<Vec<PurchaseDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_entry_purchases(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let purchases = service.get_entry_purchases(entry_id).await?;
    let dtos: Vec<PurchaseDto> = purchases.into_iter().map(PurchaseDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Fetched entry purchases!", dtos)),
    ))
}

/// Create a purchase.
#[utoipa::path(
    post,
    path = "/api/v1/purchases",
    tag = PURCHASE_TAG,
    request_body = CreatePurchaseDto,
    responses(
        (status = 201, description = "Purchase created", body = ResponseDto<PurchaseDto>),
        (status = 400, description = "Invalid purchase data", body = ErrorDto)
    ),
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let params = CreatePurchaseParams::from_dto(payload);
    let purchase = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_response(
            "Created purchase!",
            PurchaseDto::from(purchase),
        )),
    ))
}

/// Apply a partial purchase update.
#[utoipa::path(
    patch,
    path = "/api/v1/purchases/{id}",
    tag = PURCHASE_TAG,
    params(("id" = i32, Path, description = "Purchase id")),
    request_body = UpdatePurchaseDto,
    responses(
        (status = 200, description = "Purchase updated", body = ResponseDto<PurchaseDto>),
        (status = 404, description = "Purchase does not exist", body = ErrorDto)
    ),
)]
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<i32>,
    Json(payload): Json<UpdatePurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let params = UpdatePurchaseParams::from_dto(payload);
    let purchase = service.update(purchase_id, params).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Updated purchase!",
            PurchaseDto::from(purchase),
        )),
    ))
}

/// Delete a purchase.
#[utoipa::path(
    delete,
    path = "/api/v1/purchases/{id}",
    tag = PURCHASE_TAG,
    params(("id" = i32, Path, description = "Purchase id")),
    responses(
        (status = 200, description = "Purchase deleted", body = ResponseDto<i32>),
        (status = 404, description = "Purchase does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let deleted_id = service.delete(purchase_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Deleted purchase!", deleted_id)),
    ))
}

/// Delete a batch of purchases in one request.
///
/// Ids that do not exist are skipped; the requested id list is echoed back.
#[utoipa::path(
    post,
    path = "/api/v1/purchases/bulk-delete",
    tag = PURCHASE_TAG,
    request_body = BulkDeletePurchasesDto,
    responses(
        (status = 200, description = "Purchases deleted", body = ResponseDto<Vec<i32>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn bulk_delete_purchases(
    State(state): State<AppState>,
    Json(payload): Json<BulkDeletePurchasesDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PurchaseService::new(&state.db);

    let deleted_ids = service.delete_many(payload.purchase_ids).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Deleted purchases!", deleted_ids)),
    ))
}
