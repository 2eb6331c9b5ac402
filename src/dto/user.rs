use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::sea_orm_active_enums::{Currency, Theme};

/// Safe-user projection returned by every user-facing endpoint.
///
/// This type deliberately has no password or verification-code fields, so a
/// serialized user can never leak credentials: redaction happens by
/// construction, not by stripping fields off the entity at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub email_verified: bool,
    pub mobile_number: Option<String>,
    pub currency: CurrencyDto,
    pub theme: ThemeDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserDto {
    fn from(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            email_verified: entity.email_verified,
            mobile_number: entity.mobile_number,
            currency: entity.currency.into(),
            theme: entity.theme.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Wire representation of a user's display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyDto {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl From<Currency> for CurrencyDto {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Usd => Self::Usd,
            Currency::Eur => Self::Eur,
            Currency::Gbp => Self::Gbp,
            Currency::Cad => Self::Cad,
            Currency::Aud => Self::Aud,
        }
    }
}

impl From<CurrencyDto> for Currency {
    fn from(currency: CurrencyDto) -> Self {
        match currency {
            CurrencyDto::Usd => Self::Usd,
            CurrencyDto::Eur => Self::Eur,
            CurrencyDto::Gbp => Self::Gbp,
            CurrencyDto::Cad => Self::Cad,
            CurrencyDto::Aud => Self::Aud,
        }
    }
}

/// Wire representation of a user's UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeDto {
    Light,
    Dark,
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl From<ThemeDto> for Theme {
    fn from(theme: ThemeDto) -> Self {
        match theme {
            ThemeDto::Light => Self::Light,
            ThemeDto::Dark => Self::Dark,
        }
    }
}

/// Payload for partial profile updates.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub username: Option<String>,
    pub currency: Option<CurrencyDto>,
    pub theme: Option<ThemeDto>,
    pub mobile_number: Option<String>,
}

/// Payload for a password change.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordDto {
    pub new_password: String,
}
