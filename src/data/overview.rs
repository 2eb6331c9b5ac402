//! Overview data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::overview::{CreateOverviewParams, UpdateOverviewParams};

/// Repository providing database operations for overviews.
pub struct OverviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OverviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all overviews ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<entity::overview::Model>, DbErr> {
        entity::prelude::Overview::find()
            .order_by_asc(entity::overview::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds an overview by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::overview::Model>, DbErr> {
        entity::prelude::Overview::find_by_id(id).one(self.db).await
    }

    /// Inserts a new overview.
    pub async fn create(
        &self,
        params: CreateOverviewParams,
    ) -> Result<entity::overview::Model, DbErr> {
        entity::overview::ActiveModel {
            income: ActiveValue::Set(params.income),
            savings: ActiveValue::Set(params.savings),
            owner_id: ActiveValue::Set(params.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update; only provided fields change.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOverviewParams,
    ) -> Result<Option<entity::overview::Model>, DbErr> {
        let Some(overview) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::overview::ActiveModel = overview.into();
        if let Some(income) = params.income {
            active_model.income = ActiveValue::Set(income);
        }
        if let Some(savings) = params.savings {
            active_model.savings = ActiveValue::Set(savings);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes an overview by primary key, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::Overview::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok((result.rows_affected > 0).then_some(id))
    }
}
