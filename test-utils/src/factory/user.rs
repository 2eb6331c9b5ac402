//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{Currency, Theme};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("custom@example.com")
///     .username("CustomUser")
///     .email_verified(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    username: String,
    password: String,
    verification_code: Option<String>,
    email_verified: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - username: `"user_{id}"`
    /// - password: a fixed placeholder hash string
    /// - verification_code: `None`
    /// - email_verified: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            username: format!("user_{}", id),
            password: "$argon2id$test-only-placeholder-hash".to_string(),
            verification_code: None,
            email_verified: false,
        }
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the pending verification code for the user.
    pub fn verification_code(mut self, code: impl Into<String>) -> Self {
        self.verification_code = Some(code.into());
        self
    }

    /// Sets whether the user's email address has been verified.
    pub fn email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
            verification_code: ActiveValue::Set(self.verification_code),
            email_verified: ActiveValue::Set(self.email_verified),
            mobile_number: ActiveValue::Set(None),
            currency: ActiveValue::Set(Currency::Usd),
            theme: ActiveValue::Set(Theme::Dark),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific email address.
///
/// Shorthand for `UserFactory::new(db).email(email).build().await`.
pub async fn create_user_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).email(email).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.email.is_empty());
        assert!(!user.username.is_empty());
        assert!(!user.email_verified);
        assert!(user.verification_code.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .email("custom@example.com")
            .username("CustomUser")
            .verification_code("123456")
            .email_verified(true)
            .build()
            .await?;

        assert_eq!(user.email, "custom@example.com");
        assert_eq!(user.username, "CustomUser");
        assert_eq!(user.verification_code.as_deref(), Some("123456"));
        assert!(user.email_verified);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.email, user2.email);
        assert_ne!(user1.username, user2.username);

        Ok(())
    }
}
