//! User service for account management business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::UpdateUserParams,
    service::auth::hash_password,
};

pub const ACCOUNT_DOES_NOT_EXIST: &str = "Account does not exist.";

const FETCH_ACCOUNTS_FAILED: &str =
    "There was an error fetching accounts. Please refresh the page.";
const PASSWORD_UPDATE_FAILED: &str = "Failed to update password. Please try again.";

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by ascending id.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All stored users
    /// - `Err(AppError::InternalError)` - Storage failure, surfaced as a
    ///   retry-suggesting message
    pub async fn get_users(&self) -> Result<Vec<entity::user::Model>, AppError> {
        UserRepository::new(self.db).get_all().await.map_err(|err| {
            tracing::error!("Failed to fetch accounts: {err}");
            AppError::InternalError(FETCH_ACCOUNTS_FAILED.to_string())
        })
    }

    /// Retrieves a single user by id.
    ///
    /// Any failure, including storage faults, surfaces as a 404 with the fixed
    /// account message.
    pub async fn get_user(&self, id: i32) -> Result<entity::user::Model, AppError> {
        match UserRepository::new(self.db).find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to fetch account {id}: {err}");
                Err(AppError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    /// Applies a partial profile update.
    pub async fn update_user(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<entity::user::Model, AppError> {
        match UserRepository::new(self.db).update(id, params).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to update account {id}: {err}");
                Err(AppError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    /// Hashes and stores a new password for the user.
    pub async fn update_password(&self, id: i32, new_password: &str) -> Result<(), AppError> {
        let password_hash = hash_password(new_password)?;

        match UserRepository::new(self.db)
            .update_password(id, password_hash)
            .await
        {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(AppError::BadRequest(PASSWORD_UPDATE_FAILED.to_string())),
            Err(err) => {
                tracing::error!("Failed to update password for account {id}: {err}");
                Err(AppError::BadRequest(PASSWORD_UPDATE_FAILED.to_string()))
            }
        }
    }

    /// Deletes a user, returning the deleted id.
    pub async fn delete_user(&self, id: i32) -> Result<i32, AppError> {
        match UserRepository::new(self.db).delete(id).await {
            Ok(Some(deleted_id)) => Ok(deleted_id),
            Ok(None) => Err(AppError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to delete account {id}: {err}");
                Err(AppError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn delete_user_returns_deleted_id() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let service = UserService::new(db);

        let deleted_id = service.delete_user(user.id).await.unwrap();

        assert_eq!(deleted_id, user.id);
    }

    #[tokio::test]
    async fn delete_missing_user_maps_to_not_found_with_fixed_message() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);

        let err = service.delete_user(9999).await.unwrap_err();

        match err {
            AppError::NotFound(msg) => assert_eq!(msg, ACCOUNT_DOES_NOT_EXIST),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_user_only_touches_provided_fields() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .username("original")
            .build()
            .await
            .unwrap();
        let service = UserService::new(db);

        let updated = service
            .update_user(
                user.id,
                UpdateUserParams {
                    mobile_number: Some("555-0100".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "original");
        assert_eq!(updated.mobile_number.as_deref(), Some("555-0100"));
    }
}
