//! Bug report parameter types.

use crate::dto::bug_report::{CreateBugReportDto, UpdateBugReportDto};

/// Parameters for filing a bug report.
#[derive(Debug, Clone)]
pub struct CreateBugReportParams {
    pub issue: String,
    pub details: Option<String>,
    pub owner_id: i32,
}

impl CreateBugReportParams {
    pub fn from_dto(dto: CreateBugReportDto) -> Self {
        Self {
            issue: dto.issue,
            details: dto.details,
            owner_id: dto.owner_id,
        }
    }
}

/// Parameters for amending a bug report.
#[derive(Debug, Clone, Default)]
pub struct UpdateBugReportParams {
    pub issue: Option<String>,
    pub details: Option<String>,
}

impl UpdateBugReportParams {
    pub fn from_dto(dto: UpdateBugReportDto) -> Self {
        Self {
            issue: dto.issue,
            details: dto.details,
        }
    }
}
