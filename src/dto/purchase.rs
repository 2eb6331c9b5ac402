use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::sea_orm_active_enums::Category;

/// Purchase as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub id: i32,
    pub placement: Option<i32>,
    pub category: Option<CategoryDto>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub entry_id: i32,
}

impl From<entity::purchase::Model> for PurchaseDto {
    fn from(entity: entity::purchase::Model) -> Self {
        Self {
            id: entity.id,
            placement: entity.placement,
            category: entity.category.map(CategoryDto::from),
            description: entity.description,
            cost: entity.cost,
            entry_id: entity.entry_id,
        }
    }
}

/// Wire representation of a purchase's spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDto {
    Monthly,
    Need,
    Planned,
    Impulse,
    Regret,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Monthly => Self::Monthly,
            Category::Need => Self::Need,
            Category::Planned => Self::Planned,
            Category::Impulse => Self::Impulse,
            Category::Regret => Self::Regret,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(category: CategoryDto) -> Self {
        match category {
            CategoryDto::Monthly => Self::Monthly,
            CategoryDto::Need => Self::Need,
            CategoryDto::Planned => Self::Planned,
            CategoryDto::Impulse => Self::Impulse,
            CategoryDto::Regret => Self::Regret,
        }
    }
}

/// Payload for creating a purchase.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseDto {
    pub entry_id: i32,
    pub placement: Option<i32>,
    pub category: Option<CategoryDto>,
    pub description: Option<String>,
    pub cost: Option<f64>,
}

/// Payload for partial purchase updates.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePurchaseDto {
    pub placement: Option<i32>,
    pub category: Option<CategoryDto>,
    pub description: Option<String>,
    pub cost: Option<f64>,
}

/// Payload for deleting a batch of purchases in one request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeletePurchasesDto {
    pub purchase_ids: Vec<i32>,
}
