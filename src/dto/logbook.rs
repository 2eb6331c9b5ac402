use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Logbook as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogbookDto {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::logbook::Model> for LogbookDto {
    fn from(entity: entity::logbook::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Payload for creating a logbook.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogbookDto {
    pub name: String,
    pub owner_id: i32,
}

/// Payload for renaming a logbook.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogbookDto {
    pub name: Option<String>,
}
