//! Purchase parameter types.

use entity::sea_orm_active_enums::Category;

use crate::dto::purchase::{CreatePurchaseDto, UpdatePurchaseDto};

/// Parameters for creating a purchase.
#[derive(Debug, Clone)]
pub struct CreatePurchaseParams {
    pub entry_id: i32,
    pub placement: Option<i32>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub cost: Option<f64>,
}

impl CreatePurchaseParams {
    pub fn from_dto(dto: CreatePurchaseDto) -> Self {
        Self {
            entry_id: dto.entry_id,
            placement: dto.placement,
            category: dto.category.map(Category::from),
            description: dto.description,
            cost: dto.cost,
        }
    }
}

/// Parameters for a partial purchase update.
#[derive(Debug, Clone, Default)]
pub struct UpdatePurchaseParams {
    pub placement: Option<i32>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub cost: Option<f64>,
}

impl UpdatePurchaseParams {
    pub fn from_dto(dto: UpdatePurchaseDto) -> Self {
        Self {
            placement: dto.placement,
            category: dto.category.map(Category::from),
            description: dto.description,
            cost: dto.cost,
        }
    }
}
