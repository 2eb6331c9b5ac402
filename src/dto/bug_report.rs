use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bug report as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BugReportDto {
    pub id: i32,
    pub issue: String,
    pub details: Option<String>,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::bug_report::Model> for BugReportDto {
    fn from(entity: entity::bug_report::Model) -> Self {
        Self {
            id: entity.id,
            issue: entity.issue,
            details: entity.details,
            owner_id: entity.owner_id,
            created_at: entity.created_at,
        }
    }
}

/// Payload for filing a bug report.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBugReportDto {
    pub issue: String,
    pub details: Option<String>,
    pub owner_id: i32,
}

/// Payload for amending a bug report.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBugReportDto {
    pub issue: Option<String>,
    pub details: Option<String>,
}
