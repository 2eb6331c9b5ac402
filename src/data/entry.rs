//! Entry data repository for database operations.
//!
//! Entries are the one place with real write-path rules: a scoped
//! duplicate-name pre-check before create/rename, and a transactional create
//! that inserts the entry together with its single companion purchase.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::entry::{CreateEntryParams, EntryWithPurchases, UpdateEntryParams};

/// Repository providing database operations for entries and their purchases.
pub struct EntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all entries ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<entity::entry::Model>, DbErr> {
        entity::prelude::Entry::find()
            .order_by_asc(entity::entry::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds an entry by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::entry::Model>, DbErr> {
        entity::prelude::Entry::find_by_id(id).one(self.db).await
    }

    /// Gets all entries of an overview, each with its purchases ordered by
    /// placement ascending.
    pub async fn get_by_overview_id(
        &self,
        overview_id: i32,
    ) -> Result<Vec<EntryWithPurchases>, DbErr> {
        let entries = entity::prelude::Entry::find()
            .filter(entity::entry::Column::OverviewId.eq(overview_id))
            .order_by_asc(entity::entry::Column::Id)
            .all(self.db)
            .await?;

        self.with_purchases(entries).await
    }

    /// Gets all entries of a logbook, each with its purchases ordered by
    /// placement ascending.
    pub async fn get_by_logbook_id(
        &self,
        logbook_id: i32,
    ) -> Result<Vec<EntryWithPurchases>, DbErr> {
        let entries = entity::prelude::Entry::find()
            .filter(entity::entry::Column::LogbookId.eq(logbook_id))
            .order_by_asc(entity::entry::Column::Id)
            .all(self.db)
            .await?;

        self.with_purchases(entries).await
    }

    /// Checks whether an entry with the given name already exists under the
    /// supplied parent.
    ///
    /// The check is scoped to the overview when an overview id is supplied,
    /// otherwise to the logbook. With neither parent id there is nothing to
    /// scope against and the entry counts as non-duplicate.
    ///
    /// # Returns
    /// - `Ok(true)` - A same-named entry exists under the same parent
    /// - `Ok(false)` - Name is free within its scope (or no scope was given)
    /// - `Err(DbErr)` - Database error during the lookup
    pub async fn name_exists(
        &self,
        name: &str,
        overview_id: Option<i32>,
        logbook_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let count = if let Some(overview_id) = overview_id {
            entity::prelude::Entry::find()
                .filter(entity::entry::Column::Name.eq(name))
                .filter(entity::entry::Column::OverviewId.eq(overview_id))
                .count(self.db)
                .await?
        } else if let Some(logbook_id) = logbook_id {
            entity::prelude::Entry::find()
                .filter(entity::entry::Column::Name.eq(name))
                .filter(entity::entry::Column::LogbookId.eq(logbook_id))
                .count(self.db)
                .await?
        } else {
            return Ok(false);
        };

        Ok(count > 0)
    }

    /// Inserts a new entry together with one empty companion purchase.
    ///
    /// Both inserts run in a single transaction so an entry can never be
    /// observed without its initial purchase.
    ///
    /// # Arguments
    /// - `params` - Entry name and optional parent ids
    ///
    /// # Returns
    /// - `Ok(EntryWithPurchases)` - The created entry with its single purchase
    /// - `Err(DbErr)` - Database error; neither row is persisted
    pub async fn create_with_initial_purchase(
        &self,
        params: CreateEntryParams,
    ) -> Result<EntryWithPurchases, DbErr> {
        let txn = self.db.begin().await?;

        let entry = entity::entry::ActiveModel {
            name: ActiveValue::Set(params.name),
            total_spent: ActiveValue::Set(0.0),
            budget: ActiveValue::Set(None),
            overview_id: ActiveValue::Set(params.overview_id),
            logbook_id: ActiveValue::Set(params.logbook_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let purchase = entity::purchase::ActiveModel {
            placement: ActiveValue::Set(None),
            category: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            cost: ActiveValue::Set(None),
            entry_id: ActiveValue::Set(entry.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(EntryWithPurchases {
            entry,
            purchases: vec![purchase],
        })
    }

    /// Applies a partial update; only provided fields change.
    ///
    /// # Returns
    /// - `Ok(Some(EntryWithPurchases))` - The updated entry with its purchases
    /// - `Ok(None)` - No entry exists with the given id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEntryParams,
    ) -> Result<Option<EntryWithPurchases>, DbErr> {
        let Some(entry) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::entry::ActiveModel = entry.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(total_spent) = params.total_spent {
            active_model.total_spent = ActiveValue::Set(total_spent);
        }
        if let Some(budget) = params.budget {
            active_model.budget = ActiveValue::Set(Some(budget));
        }
        if let Some(overview_id) = params.overview_id {
            active_model.overview_id = ActiveValue::Set(Some(overview_id));
        }
        if let Some(logbook_id) = params.logbook_id {
            active_model.logbook_id = ActiveValue::Set(Some(logbook_id));
        }

        let updated = active_model.update(self.db).await?;
        let purchases = self.purchases_for(updated.id).await?;

        Ok(Some(EntryWithPurchases {
            entry: updated,
            purchases,
        }))
    }

    /// Deletes an entry by primary key, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::Entry::delete_by_id(id).exec(self.db).await?;

        Ok((result.rows_affected > 0).then_some(id))
    }

    /// Pairs each entry with its purchases, ordered by placement ascending.
    async fn with_purchases(
        &self,
        entries: Vec<entity::entry::Model>,
    ) -> Result<Vec<EntryWithPurchases>, DbErr> {
        let mut results = Vec::new();
        for entry in entries {
            let purchases = self.purchases_for(entry.id).await?;
            results.push(EntryWithPurchases { entry, purchases });
        }

        Ok(results)
    }

    async fn purchases_for(&self, entry_id: i32) -> Result<Vec<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::EntryId.eq(entry_id))
            .order_by_asc(entity::purchase::Column::Placement)
            .all(self.db)
            .await
    }
}
