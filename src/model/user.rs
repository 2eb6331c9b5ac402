//! User parameter types for account management operations.

use entity::sea_orm_active_enums::{Currency, Theme};

use crate::dto::user::UpdateUserDto;

/// Parameters for inserting a new user at registration.
///
/// `password` is already an argon2 PHC hash by the time this struct exists;
/// plaintext never crosses the service boundary.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub password: String,
    pub verification_code: String,
}

/// Parameters for a partial profile update.
///
/// Fields left as `None` are not touched by the update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub username: Option<String>,
    pub currency: Option<Currency>,
    pub theme: Option<Theme>,
    pub mobile_number: Option<String>,
}

impl UpdateUserParams {
    /// Converts the wire DTO into update parameters.
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email,
            username: dto.username,
            currency: dto.currency.map(Currency::from),
            theme: dto.theme.map(Theme::from),
            mobile_number: dto.mobile_number,
        }
    }
}
