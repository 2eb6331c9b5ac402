//! Overview factory for creating test overview entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test overviews with customizable fields.
pub struct OverviewFactory<'a> {
    db: &'a DatabaseConnection,
    income: f64,
    savings: f64,
    owner_id: i32,
}

impl<'a> OverviewFactory<'a> {
    /// Creates a new OverviewFactory with default values.
    ///
    /// Defaults:
    /// - income: `5000.0`
    /// - savings: `20.0`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            income: 5000.0,
            savings: 20.0,
            owner_id,
        }
    }

    /// Sets the monthly income for the overview.
    pub fn income(mut self, income: f64) -> Self {
        self.income = income;
        self
    }

    /// Sets the savings percentage for the overview.
    pub fn savings(mut self, savings: f64) -> Self {
        self.savings = savings;
        self
    }

    /// Builds and inserts the overview entity into the database.
    pub async fn build(self) -> Result<entity::overview::Model, DbErr> {
        entity::overview::ActiveModel {
            income: ActiveValue::Set(self.income),
            savings: ActiveValue::Set(self.savings),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an overview with default values owned by the given user.
pub async fn create_overview(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::overview::Model, DbErr> {
    OverviewFactory::new(db, owner_id).build().await
}
