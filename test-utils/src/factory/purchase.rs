//! Purchase factory for creating test purchase entities.

use entity::sea_orm_active_enums::Category;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test purchases with customizable fields.
///
/// All fields besides the owning entry default to `None`, matching the empty
/// companion purchase a new entry is created with.
pub struct PurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    placement: Option<i32>,
    category: Option<Category>,
    description: Option<String>,
    cost: Option<f64>,
    entry_id: i32,
}

impl<'a> PurchaseFactory<'a> {
    /// Creates a new PurchaseFactory with all optional fields unset.
    pub fn new(db: &'a DatabaseConnection, entry_id: i32) -> Self {
        Self {
            db,
            placement: None,
            category: None,
            description: None,
            cost: None,
            entry_id,
        }
    }

    /// Sets the placement ordering for the purchase.
    pub fn placement(mut self, placement: i32) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Sets the spending category for the purchase.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the description for the purchase.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the cost for the purchase.
    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Builds and inserts the purchase entity into the database.
    pub async fn build(self) -> Result<entity::purchase::Model, DbErr> {
        entity::purchase::ActiveModel {
            placement: ActiveValue::Set(self.placement),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            cost: ActiveValue::Set(self.cost),
            entry_id: ActiveValue::Set(self.entry_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty purchase attached to the given entry.
pub async fn create_purchase(
    db: &DatabaseConnection,
    entry_id: i32,
) -> Result<entity::purchase::Model, DbErr> {
    PurchaseFactory::new(db, entry_id).build().await
}

/// Creates a purchase at a specific placement within the entry.
pub async fn create_purchase_at_placement(
    db: &DatabaseConnection,
    entry_id: i32,
    placement: i32,
) -> Result<entity::purchase::Model, DbErr> {
    PurchaseFactory::new(db, entry_id)
        .placement(placement)
        .build()
        .await
}
