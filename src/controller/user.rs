use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto, TextResponseDto},
        user::{UpdatePasswordDto, UpdateUserDto, UserDto},
    },
    error::AppError,
    model::user::UpdateUserParams,
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get all accounts.
///
/// Returns safe-user projections for every stored account, ascending by id.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = ResponseDto<Vec<UserDto>>),
        (status = 500, description = "Storage failure", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_users().await?;
    let safe_users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(ResponseDto::response_only(safe_users))))
}

/// Get a single account by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The account", body = ResponseDto<UserDto>),
        (status = 404, description = "Account does not exist", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::response_only(UserDto::from(user))),
    ))
}

/// Apply a partial profile update.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = ResponseDto<UserDto>),
        (status = 404, description = "Account does not exist", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = UpdateUserParams::from_dto(payload);
    let user = service.update_user(user_id, params).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response(
            "Account updated!",
            UserDto::from(user),
        )),
    ))
}

/// Replace the account's password.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}/update-password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Password update failed", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service
        .update_password(user_id, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TextResponseDto::text("Password updated!")),
    ))
}

/// Delete an account.
///
/// # Returns
/// - `200 OK` - Deleted; the removed id is echoed in the response payload
/// - `404 Not Found` - Account does not exist
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Account deleted", body = ResponseDto<i32>),
        (status = 404, description = "Account does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let deleted_id = service.delete_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::with_response("Account deleted!", deleted_id)),
    ))
}
