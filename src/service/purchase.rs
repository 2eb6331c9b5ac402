//! Purchase service.

use sea_orm::DatabaseConnection;

use crate::{
    data::purchase::PurchaseRepository,
    error::AppError,
    model::purchase::{CreatePurchaseParams, UpdatePurchaseParams},
};

pub const PURCHASE_DOES_NOT_EXIST: &str = "Purchase does not exist.";

const FETCH_PURCHASES_FAILED: &str =
    "There was an error fetching purchases. Please refresh the page.";

/// Service providing business logic for purchases.
pub struct PurchaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_purchases(&self) -> Result<Vec<entity::purchase::Model>, AppError> {
        PurchaseRepository::new(self.db)
            .get_all()
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch purchases: {err}");
                AppError::InternalError(FETCH_PURCHASES_FAILED.to_string())
            })
    }

    pub async fn get_purchase(&self, id: i32) -> Result<entity::purchase::Model, AppError> {
        match PurchaseRepository::new(self.db).find_by_id(id).await {
            Ok(Some(purchase)) => Ok(purchase),
            Ok(None) => Err(AppError::NotFound(PURCHASE_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to fetch purchase {id}: {err}");
                Err(AppError::NotFound(PURCHASE_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    /// Retrieves an entry's purchases ordered by placement ascending.
    pub async fn get_entry_purchases(
        &self,
        entry_id: i32,
    ) -> Result<Vec<entity::purchase::Model>, AppError> {
        PurchaseRepository::new(self.db)
            .get_by_entry_id(entry_id)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch purchases for entry {entry_id}: {err}");
                AppError::InternalError(FETCH_PURCHASES_FAILED.to_string())
            })
    }

    pub async fn create(
        &self,
        params: CreatePurchaseParams,
    ) -> Result<entity::purchase::Model, AppError> {
        let purchase = PurchaseRepository::new(self.db).create(params).await?;
        Ok(purchase)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePurchaseParams,
    ) -> Result<entity::purchase::Model, AppError> {
        match PurchaseRepository::new(self.db).update(id, params).await {
            Ok(Some(purchase)) => Ok(purchase),
            Ok(None) => Err(AppError::NotFound(PURCHASE_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to update purchase {id}: {err}");
                Err(AppError::NotFound(PURCHASE_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        match PurchaseRepository::new(self.db).delete(id).await {
            Ok(Some(deleted_id)) => Ok(deleted_id),
            Ok(None) => Err(AppError::NotFound(PURCHASE_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to delete purchase {id}: {err}");
                Err(AppError::NotFound(PURCHASE_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    /// Deletes a batch of purchases, echoing back the requested ids.
    ///
    /// Ids that do not exist are skipped silently; the delete statement simply
    /// affects fewer rows.
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<Vec<i32>, AppError> {
        PurchaseRepository::new(self.db).delete_many(&ids).await?;
        Ok(ids)
    }
}
