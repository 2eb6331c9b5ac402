//! Logbook service: owner-scoped duplicate-name pre-checks plus CRUD.

use sea_orm::DatabaseConnection;

use crate::{
    data::logbook::LogbookRepository,
    error::AppError,
    model::logbook::{CreateLogbookOutcome, CreateLogbookParams, UpdateLogbookOutcome},
};

pub const LOGBOOK_DOES_NOT_EXIST: &str = "Logbook does not exist.";

const FETCH_LOGBOOKS_FAILED: &str =
    "There was an error fetching logbooks. Please refresh the page.";

/// Service providing business logic for logbooks.
pub struct LogbookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogbookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_logbooks(&self) -> Result<Vec<entity::logbook::Model>, AppError> {
        LogbookRepository::new(self.db)
            .get_all()
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch logbooks: {err}");
                AppError::InternalError(FETCH_LOGBOOKS_FAILED.to_string())
            })
    }

    pub async fn get_logbook(&self, id: i32) -> Result<entity::logbook::Model, AppError> {
        match LogbookRepository::new(self.db).find_by_id(id).await {
            Ok(Some(logbook)) => Ok(logbook),
            Ok(None) => Err(AppError::NotFound(LOGBOOK_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to fetch logbook {id}: {err}");
                Err(AppError::NotFound(LOGBOOK_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    pub async fn get_user_logbooks(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::logbook::Model>, AppError> {
        LogbookRepository::new(self.db)
            .get_by_owner_id(owner_id)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch logbooks for user {owner_id}: {err}");
                AppError::InternalError(FETCH_LOGBOOKS_FAILED.to_string())
            })
    }

    /// Creates a logbook after checking the owner doesn't already have one
    /// with the same name.
    pub async fn create(
        &self,
        params: CreateLogbookParams,
    ) -> Result<CreateLogbookOutcome, AppError> {
        let repo = LogbookRepository::new(self.db);

        if repo.name_exists(&params.name, params.owner_id).await? {
            return Ok(CreateLogbookOutcome::DuplicateName(params.name));
        }

        let logbook = repo.create(params).await?;

        Ok(CreateLogbookOutcome::Created(logbook))
    }

    /// Renames a logbook, re-running the owner-scoped pre-check.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
    ) -> Result<UpdateLogbookOutcome, AppError> {
        let repo = LogbookRepository::new(self.db);

        let Some(logbook) = repo.find_by_id(id).await? else {
            return Ok(UpdateLogbookOutcome::NotFound);
        };

        if let Some(new_name) = &name {
            if repo.name_exists(new_name, logbook.owner_id).await? {
                return Ok(UpdateLogbookOutcome::DuplicateName(new_name.clone()));
            }
        }

        match repo.update(id, name).await {
            Ok(Some(updated)) => Ok(UpdateLogbookOutcome::Updated(updated)),
            Ok(None) => Ok(UpdateLogbookOutcome::NotFound),
            Err(err) => {
                tracing::error!("Failed to update logbook {id}: {err}");
                Ok(UpdateLogbookOutcome::NotFound)
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        match LogbookRepository::new(self.db).delete(id).await {
            Ok(Some(deleted_id)) => Ok(deleted_id),
            Ok(None) => Err(AppError::NotFound(LOGBOOK_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to delete logbook {id}: {err}");
                Err(AppError::NotFound(LOGBOOK_DOES_NOT_EXIST.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn create_rejects_duplicate_name_for_same_owner() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Logbook)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let service = LogbookService::new(db);

        let first = service
            .create(CreateLogbookParams {
                name: "Travel".to_string(),
                owner_id: user.id,
            })
            .await
            .unwrap();
        assert!(matches!(first, CreateLogbookOutcome::Created(_)));

        let second = service
            .create(CreateLogbookParams {
                name: "Travel".to_string(),
                owner_id: user.id,
            })
            .await
            .unwrap();
        assert!(matches!(second, CreateLogbookOutcome::DuplicateName(_)));
    }

    #[tokio::test]
    async fn same_name_is_allowed_for_a_different_owner() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Logbook)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first_user = factory::create_user(db).await.unwrap();
        let second_user = factory::create_user(db).await.unwrap();
        let service = LogbookService::new(db);

        let first = service
            .create(CreateLogbookParams {
                name: "Travel".to_string(),
                owner_id: first_user.id,
            })
            .await
            .unwrap();
        assert!(matches!(first, CreateLogbookOutcome::Created(_)));

        let second = service
            .create(CreateLogbookParams {
                name: "Travel".to_string(),
                owner_id: second_user.id,
            })
            .await
            .unwrap();
        assert!(matches!(second, CreateLogbookOutcome::Created(_)));
    }
}
