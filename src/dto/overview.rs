use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overview as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    pub id: i32,
    pub income: f64,
    pub savings: f64,
    pub owner_id: i32,
}

impl From<entity::overview::Model> for OverviewDto {
    fn from(entity: entity::overview::Model) -> Self {
        Self {
            id: entity.id,
            income: entity.income,
            savings: entity.savings,
            owner_id: entity.owner_id,
        }
    }
}

/// Payload for creating an overview.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOverviewDto {
    pub income: f64,
    pub savings: Option<f64>,
    pub owner_id: i32,
}

/// Payload for partial overview updates.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOverviewDto {
    pub income: Option<f64>,
    pub savings: Option<f64>,
}
