//! User data repository for database operations.
//!
//! Handles account creation, profile and credential updates, queries, and
//! deletion. Credential fields live only in the entity model; projection to a
//! client-safe shape happens at the controller boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParams, UpdateUserParams};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Inserts a new user with default preferences.
    ///
    /// The unique indexes on email and username act as the storage-level
    /// backstop should two concurrent registrations pass the existence
    /// pre-check simultaneously.
    ///
    /// # Arguments
    /// - `params` - Registration data; the password is already hashed
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            username: ActiveValue::Set(params.username),
            password: ActiveValue::Set(params.password),
            verification_code: ActiveValue::Set(Some(params.verification_code)),
            email_verified: ActiveValue::Set(false),
            mobile_number: ActiveValue::Set(None),
            currency: ActiveValue::Set(entity::sea_orm_active_enums::Currency::Usd),
            theme: ActiveValue::Set(entity::sea_orm_active_enums::Theme::Dark),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial profile update.
    ///
    /// Only fields provided as `Some` are written; everything else keeps its
    /// stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user exists with the given id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(currency) = params.currency {
            active_model.currency = ActiveValue::Set(currency);
        }
        if let Some(theme) = params.theme {
            active_model.theme = ActiveValue::Set(theme);
        }
        if let Some(mobile_number) = params.mobile_number {
            active_model.mobile_number = ActiveValue::Set(Some(mobile_number));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Replaces the stored password hash.
    pub async fn update_password(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password = ActiveValue::Set(password_hash);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Stores or clears the pending verification code.
    pub async fn set_verification_code(
        &self,
        id: i32,
        code: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.verification_code = ActiveValue::Set(code);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Marks the user's email as verified and clears the pending code.
    pub async fn mark_email_verified(
        &self,
        id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.email_verified = ActiveValue::Set(true);
        active_model.verification_code = ActiveValue::Set(None);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The deleted user's id
    /// - `Ok(None)` - No user existed with the given id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok((result.rows_affected > 0).then_some(id))
    }
}
