//! Purchase data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::purchase::{CreatePurchaseParams, UpdatePurchaseParams};

/// Repository providing database operations for purchases.
pub struct PurchaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all purchases ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find()
            .order_by_asc(entity::purchase::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a purchase by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find_by_id(id).one(self.db).await
    }

    /// Gets all purchases of an entry, ordered by placement ascending.
    pub async fn get_by_entry_id(
        &self,
        entry_id: i32,
    ) -> Result<Vec<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::EntryId.eq(entry_id))
            .order_by_asc(entity::purchase::Column::Placement)
            .all(self.db)
            .await
    }

    /// Inserts a new purchase.
    pub async fn create(
        &self,
        params: CreatePurchaseParams,
    ) -> Result<entity::purchase::Model, DbErr> {
        entity::purchase::ActiveModel {
            placement: ActiveValue::Set(params.placement),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            cost: ActiveValue::Set(params.cost),
            entry_id: ActiveValue::Set(params.entry_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update; only provided fields change.
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePurchaseParams,
    ) -> Result<Option<entity::purchase::Model>, DbErr> {
        let Some(purchase) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::purchase::ActiveModel = purchase.into();
        if let Some(placement) = params.placement {
            active_model.placement = ActiveValue::Set(Some(placement));
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(Some(category));
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(cost) = params.cost {
            active_model.cost = ActiveValue::Set(Some(cost));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a purchase by primary key, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::Purchase::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok((result.rows_affected > 0).then_some(id))
    }

    /// Deletes a batch of purchases in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually removed (missing ids are skipped)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Purchase::delete_many()
            .filter(entity::purchase::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
