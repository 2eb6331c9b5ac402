use serde::Deserialize;
use utoipa::ToSchema;

/// Payload for account registration.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Payload for the first login step (credentials).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Payload for confirming a registration with an emailed code.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRegistrationDto {
    pub email: String,
    pub verification_code: String,
}

/// Payload for the second login step (emailed code).
///
/// `thirty_days` selects an extended session and is accepted but currently
/// unused: access-token issuance is disabled.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyLoginDto {
    pub email: String,
    pub verification_code: String,
    pub thirty_days: Option<bool>,
}

/// Payload for requesting a fresh verification code.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNewVerificationCodeDto {
    pub email: String,
}
