//! Entry factory for creating test entry entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test entries with customizable fields.
///
/// An entry belongs to exactly one overview or logbook; use
/// [`EntryFactory::overview_id`] or [`EntryFactory::logbook_id`] to attach it.
pub struct EntryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    total_spent: f64,
    budget: Option<f64>,
    overview_id: Option<i32>,
    logbook_id: Option<i32>,
}

impl<'a> EntryFactory<'a> {
    /// Creates a new EntryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Entry {id}"` where id is auto-incremented
    /// - total_spent: `0.0`
    /// - budget / overview_id / logbook_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Entry {}", next_id()),
            total_spent: 0.0,
            budget: None,
            overview_id: None,
            logbook_id: None,
        }
    }

    /// Sets the name for the entry.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the running total spent for the entry.
    pub fn total_spent(mut self, total_spent: f64) -> Self {
        self.total_spent = total_spent;
        self
    }

    /// Sets the budget limit for the entry.
    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Attaches the entry to an overview.
    pub fn overview_id(mut self, overview_id: i32) -> Self {
        self.overview_id = Some(overview_id);
        self
    }

    /// Attaches the entry to a logbook.
    pub fn logbook_id(mut self, logbook_id: i32) -> Self {
        self.logbook_id = Some(logbook_id);
        self
    }

    /// Builds and inserts the entry entity into the database.
    pub async fn build(self) -> Result<entity::entry::Model, DbErr> {
        entity::entry::ActiveModel {
            name: ActiveValue::Set(self.name),
            total_spent: ActiveValue::Set(self.total_spent),
            budget: ActiveValue::Set(self.budget),
            overview_id: ActiveValue::Set(self.overview_id),
            logbook_id: ActiveValue::Set(self.logbook_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entry with default values inside the given overview.
pub async fn create_entry_in_overview(
    db: &DatabaseConnection,
    overview_id: i32,
) -> Result<entity::entry::Model, DbErr> {
    EntryFactory::new(db).overview_id(overview_id).build().await
}

/// Creates an entry with default values inside the given logbook.
pub async fn create_entry_in_logbook(
    db: &DatabaseConnection,
    logbook_id: i32,
) -> Result<entity::entry::Model, DbErr> {
    EntryFactory::new(db).logbook_id(logbook_id).build().await
}
