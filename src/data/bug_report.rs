//! Bug report data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::bug_report::{CreateBugReportParams, UpdateBugReportParams};

/// Repository providing database operations for bug reports.
pub struct BugReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BugReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all bug reports ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<entity::bug_report::Model>, DbErr> {
        entity::prelude::BugReport::find()
            .order_by_asc(entity::bug_report::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a bug report by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::bug_report::Model>, DbErr> {
        entity::prelude::BugReport::find_by_id(id).one(self.db).await
    }

    /// Inserts a new bug report.
    pub async fn create(
        &self,
        params: CreateBugReportParams,
    ) -> Result<entity::bug_report::Model, DbErr> {
        entity::bug_report::ActiveModel {
            issue: ActiveValue::Set(params.issue),
            details: ActiveValue::Set(params.details),
            owner_id: ActiveValue::Set(params.owner_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update; only provided fields change.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBugReportParams,
    ) -> Result<Option<entity::bug_report::Model>, DbErr> {
        let Some(report) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::bug_report::ActiveModel = report.into();
        if let Some(issue) = params.issue {
            active_model.issue = ActiveValue::Set(issue);
        }
        if let Some(details) = params.details {
            active_model.details = ActiveValue::Set(Some(details));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a bug report by primary key, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::BugReport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok((result.rows_affected > 0).then_some(id))
    }
}
