use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entry::EntryWithPurchases;

/// Entry as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    pub id: i32,
    pub name: String,
    pub total_spent: f64,
    pub budget: Option<f64>,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
}

impl From<entity::entry::Model> for EntryDto {
    fn from(entity: entity::entry::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            total_spent: entity.total_spent,
            budget: entity.budget,
            overview_id: entity.overview_id,
            logbook_id: entity.logbook_id,
        }
    }
}

/// Entry together with the ids of its purchases, ordered by placement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryWithPurchasesDto {
    pub id: i32,
    pub name: String,
    pub total_spent: f64,
    pub budget: Option<f64>,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
    pub purchases: Vec<PurchaseIdDto>,
}

/// Bare purchase id embedded in an entry response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseIdDto {
    pub id: i32,
}

impl From<EntryWithPurchases> for EntryWithPurchasesDto {
    fn from(model: EntryWithPurchases) -> Self {
        Self {
            id: model.entry.id,
            name: model.entry.name,
            total_spent: model.entry.total_spent,
            budget: model.entry.budget,
            overview_id: model.entry.overview_id,
            logbook_id: model.entry.logbook_id,
            purchases: model
                .purchases
                .into_iter()
                .map(|purchase| PurchaseIdDto { id: purchase.id })
                .collect(),
        }
    }
}

/// Payload for creating an entry.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryDto {
    pub name: String,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
}

/// Payload for partial entry updates.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryDto {
    pub name: Option<String>,
    pub total_spent: Option<f64>,
    pub budget: Option<f64>,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
}
