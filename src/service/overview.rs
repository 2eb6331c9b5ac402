//! Overview service.

use sea_orm::DatabaseConnection;

use crate::{
    data::overview::OverviewRepository,
    error::AppError,
    model::overview::{CreateOverviewParams, UpdateOverviewParams},
};

pub const OVERVIEW_DOES_NOT_EXIST: &str = "Overview does not exist.";

const FETCH_OVERVIEWS_FAILED: &str =
    "There was an error fetching overviews. Please refresh the page.";

/// Service providing business logic for overviews.
pub struct OverviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OverviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_overviews(&self) -> Result<Vec<entity::overview::Model>, AppError> {
        OverviewRepository::new(self.db)
            .get_all()
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch overviews: {err}");
                AppError::InternalError(FETCH_OVERVIEWS_FAILED.to_string())
            })
    }

    pub async fn get_overview(&self, id: i32) -> Result<entity::overview::Model, AppError> {
        match OverviewRepository::new(self.db).find_by_id(id).await {
            Ok(Some(overview)) => Ok(overview),
            Ok(None) => Err(AppError::NotFound(OVERVIEW_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to fetch overview {id}: {err}");
                Err(AppError::NotFound(OVERVIEW_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    pub async fn create(
        &self,
        params: CreateOverviewParams,
    ) -> Result<entity::overview::Model, AppError> {
        let overview = OverviewRepository::new(self.db).create(params).await?;
        Ok(overview)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateOverviewParams,
    ) -> Result<entity::overview::Model, AppError> {
        match OverviewRepository::new(self.db).update(id, params).await {
            Ok(Some(overview)) => Ok(overview),
            Ok(None) => Err(AppError::NotFound(OVERVIEW_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to update overview {id}: {err}");
                Err(AppError::NotFound(OVERVIEW_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        match OverviewRepository::new(self.db).delete(id).await {
            Ok(Some(deleted_id)) => Ok(deleted_id),
            Ok(None) => Err(AppError::NotFound(OVERVIEW_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to delete overview {id}: {err}");
                Err(AppError::NotFound(OVERVIEW_DOES_NOT_EXIST.to_string()))
            }
        }
    }
}
