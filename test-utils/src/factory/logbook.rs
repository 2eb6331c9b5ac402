//! Logbook factory for creating test logbook entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test logbooks with customizable fields.
pub struct LogbookFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: i32,
}

impl<'a> LogbookFactory<'a> {
    /// Creates a new LogbookFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Logbook {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            name: format!("Logbook {}", next_id()),
            owner_id,
        }
    }

    /// Sets the name for the logbook.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the logbook entity into the database.
    pub async fn build(self) -> Result<entity::logbook::Model, DbErr> {
        let now = Utc::now();
        entity::logbook::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a logbook with default values owned by the given user.
pub async fn create_logbook(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::logbook::Model, DbErr> {
    LogbookFactory::new(db, owner_id).build().await
}
