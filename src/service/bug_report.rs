//! Bug report service.

use sea_orm::DatabaseConnection;

use crate::{
    data::bug_report::BugReportRepository,
    error::AppError,
    model::bug_report::{CreateBugReportParams, UpdateBugReportParams},
};

pub const BUG_REPORT_DOES_NOT_EXIST: &str = "Bug report does not exist.";

const FETCH_BUG_REPORTS_FAILED: &str =
    "There was an error fetching bug reports. Please refresh the page.";

/// Service providing business logic for bug reports.
pub struct BugReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BugReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_bug_reports(&self) -> Result<Vec<entity::bug_report::Model>, AppError> {
        BugReportRepository::new(self.db)
            .get_all()
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch bug reports: {err}");
                AppError::InternalError(FETCH_BUG_REPORTS_FAILED.to_string())
            })
    }

    pub async fn get_bug_report(&self, id: i32) -> Result<entity::bug_report::Model, AppError> {
        match BugReportRepository::new(self.db).find_by_id(id).await {
            Ok(Some(report)) => Ok(report),
            Ok(None) => Err(AppError::NotFound(BUG_REPORT_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to fetch bug report {id}: {err}");
                Err(AppError::NotFound(BUG_REPORT_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    pub async fn create(
        &self,
        params: CreateBugReportParams,
    ) -> Result<entity::bug_report::Model, AppError> {
        let report = BugReportRepository::new(self.db).create(params).await?;
        Ok(report)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateBugReportParams,
    ) -> Result<entity::bug_report::Model, AppError> {
        match BugReportRepository::new(self.db).update(id, params).await {
            Ok(Some(report)) => Ok(report),
            Ok(None) => Err(AppError::NotFound(BUG_REPORT_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to update bug report {id}: {err}");
                Err(AppError::NotFound(BUG_REPORT_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        match BugReportRepository::new(self.db).delete(id).await {
            Ok(Some(deleted_id)) => Ok(deleted_id),
            Ok(None) => Err(AppError::NotFound(BUG_REPORT_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to delete bug report {id}: {err}");
                Err(AppError::NotFound(BUG_REPORT_DOES_NOT_EXIST.to_string()))
            }
        }
    }
}
