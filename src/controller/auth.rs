use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::{ErrorDto, ResponseDto, TextResponseDto},
        auth::{
            LoginDto, RegisterDto, SendNewVerificationCodeDto, VerifyLoginDto,
            VerifyRegistrationDto,
        },
        user::UserDto,
    },
    error::AppError,
    model::auth::{LoginOutcome, RegisterOutcome, SendCodeOutcome, VerifyOutcome},
    service::{auth::AuthService, user::ACCOUNT_DOES_NOT_EXIST},
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

const EMAIL_TAKEN: &str = "An account with that email already exists!";
const INCORRECT_PASSWORD: &str = "Incorrect password. Please try again.";
const INVALID_VERIFICATION_CODE: &str = "Invalid verification code. Please try again.";
const EMAIL_ALREADY_VERIFIED: &str = "This email has already been verified!";

/// Register a new account.
///
/// Creates the account with a hashed password and a pending verification code
/// awaiting email confirmation.
///
/// # Returns
/// - `201 Created` - Account created; safe user in the response payload
/// - `400 Bad Request` - An account with the email already exists
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ResponseDto<UserDto>),
        (status = 400, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    match service
        .register(payload.email, payload.username, payload.password)
        .await?
    {
        RegisterOutcome::Registered(user) => Ok((
            StatusCode::CREATED,
            Json(ResponseDto::with_response(
                "Thank you for registering with Kujira!",
                UserDto::from(user),
            )),
        )),
        RegisterOutcome::EmailTaken => Err(AppError::BadRequest(EMAIL_TAKEN.to_string())),
    }
}

/// First login step: check credentials and issue a verification code.
///
/// # Returns
/// - `200 OK` - Credentials matched; a code is waiting in the user's inbox
/// - `400 Bad Request` - Unknown account or wrong password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Verification code issued"),
        (status = 400, description = "Unknown account or wrong password", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    match service.login(&payload.email, &payload.password).await? {
        LoginOutcome::VerificationCodeSent => Ok((
            StatusCode::OK,
            Json(TextResponseDto::text(
                "A verification code has been sent to your email!",
            )),
        )),
        LoginOutcome::InvalidCredentials => {
            Err(AppError::BadRequest(INCORRECT_PASSWORD.to_string()))
        }
        LoginOutcome::AccountMissing => {
            Err(AppError::BadRequest(ACCOUNT_DOES_NOT_EXIST.to_string()))
        }
    }
}

/// Confirm a registration with the emailed verification code.
///
/// # Returns
/// - `200 OK` - Email verified; safe user in the response payload
/// - `400 Bad Request` - Unknown account, wrong code, or already verified
#[utoipa::path(
    post,
    path = "/api/v1/auth/verify-registration",
    tag = AUTH_TAG,
    request_body = VerifyRegistrationDto,
    responses(
        (status = 200, description = "Email verified", body = ResponseDto<UserDto>),
        (status = 400, description = "Unknown account, wrong code, or already verified", body = ErrorDto)
    ),
)]
pub async fn verify_registration(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    match service
        .verify_registration(&payload.email, &payload.verification_code)
        .await?
    {
        VerifyOutcome::Verified(user) => Ok((
            StatusCode::OK,
            Json(ResponseDto::with_response(
                "Email verified!",
                UserDto::from(user),
            )),
        )),
        VerifyOutcome::InvalidCode => {
            Err(AppError::BadRequest(INVALID_VERIFICATION_CODE.to_string()))
        }
        VerifyOutcome::AlreadyVerified => {
            Err(AppError::BadRequest(EMAIL_ALREADY_VERIFIED.to_string()))
        }
        VerifyOutcome::AccountMissing => {
            Err(AppError::BadRequest(ACCOUNT_DOES_NOT_EXIST.to_string()))
        }
    }
}

/// Second login step: confirm the emailed verification code.
///
/// The `thirtyDays` flag participates in payload validation but is otherwise
/// unused while access-token issuance is disabled.
///
/// # Returns
/// - `200 OK` - Code matched; safe user in the response payload
/// - `400 Bad Request` - Unknown account or wrong code
#[utoipa::path(
    post,
    path = "/api/v1/auth/verify-login",
    tag = AUTH_TAG,
    request_body = VerifyLoginDto,
    responses(
        (status = 200, description = "Logged in", body = ResponseDto<UserDto>),
        (status = 400, description = "Unknown account or wrong code", body = ErrorDto)
    ),
)]
pub async fn verify_login(
    State(state): State<AppState>,
    Json(payload): Json<VerifyLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    // Extended-session flag; accepted but unused while token issuance is
    // disabled.
    let _thirty_days = payload.thirty_days;

    match service
        .verify_login(&payload.email, &payload.verification_code)
        .await?
    {
        VerifyOutcome::Verified(user) => Ok((
            StatusCode::OK,
            Json(ResponseDto::with_response(
                "Logged in!",
                UserDto::from(user),
            )),
        )),
        VerifyOutcome::InvalidCode | VerifyOutcome::AlreadyVerified => {
            Err(AppError::BadRequest(INVALID_VERIFICATION_CODE.to_string()))
        }
        VerifyOutcome::AccountMissing => {
            Err(AppError::BadRequest(ACCOUNT_DOES_NOT_EXIST.to_string()))
        }
    }
}

/// Generate and store a fresh verification code for the account.
///
/// # Returns
/// - `200 OK` - New code issued
/// - `400 Bad Request` - Unknown account
#[utoipa::path(
    post,
    path = "/api/v1/auth/send-new-verification-code",
    tag = AUTH_TAG,
    request_body = SendNewVerificationCodeDto,
    responses(
        (status = 200, description = "New verification code issued"),
        (status = 400, description = "Unknown account", body = ErrorDto)
    ),
)]
pub async fn send_new_verification_code(
    State(state): State<AppState>,
    Json(payload): Json<SendNewVerificationCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    match service.send_new_verification_code(&payload.email).await? {
        SendCodeOutcome::CodeSent => Ok((
            StatusCode::OK,
            Json(TextResponseDto::text("New verification code sent!")),
        )),
        SendCodeOutcome::AccountMissing => {
            Err(AppError::BadRequest(ACCOUNT_DOES_NOT_EXIST.to_string()))
        }
    }
}
