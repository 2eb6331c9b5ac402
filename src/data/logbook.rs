//! Logbook data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::logbook::CreateLogbookParams;

/// Repository providing database operations for logbooks.
pub struct LogbookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogbookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all logbooks ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<entity::logbook::Model>, DbErr> {
        entity::prelude::Logbook::find()
            .order_by_asc(entity::logbook::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a logbook by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::logbook::Model>, DbErr> {
        entity::prelude::Logbook::find_by_id(id).one(self.db).await
    }

    /// Gets all logbooks belonging to an owner, ordered by ascending id.
    pub async fn get_by_owner_id(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::logbook::Model>, DbErr> {
        entity::prelude::Logbook::find()
            .filter(entity::logbook::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::logbook::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether the owner already has a logbook with the given name.
    pub async fn name_exists(&self, name: &str, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Logbook::find()
            .filter(entity::logbook::Column::Name.eq(name))
            .filter(entity::logbook::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new logbook.
    pub async fn create(
        &self,
        params: CreateLogbookParams,
    ) -> Result<entity::logbook::Model, DbErr> {
        let now = Utc::now();
        entity::logbook::ActiveModel {
            name: ActiveValue::Set(params.name),
            owner_id: ActiveValue::Set(params.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Renames a logbook.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
    ) -> Result<Option<entity::logbook::Model>, DbErr> {
        let Some(logbook) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::logbook::ActiveModel = logbook.into();
        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a logbook by primary key, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::Logbook::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok((result.rows_affected > 0).then_some(id))
    }
}
