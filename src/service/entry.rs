//! Entry service: duplicate-name pre-checks and the create/update policy.

use sea_orm::DatabaseConnection;

use crate::{
    data::entry::EntryRepository,
    error::AppError,
    model::entry::{
        CreateEntryOutcome, CreateEntryParams, EntryWithPurchases, UpdateEntryOutcome,
        UpdateEntryParams,
    },
};

pub const ENTRY_DOES_NOT_EXIST: &str = "Entry does not exist.";

const FETCH_ENTRIES_FAILED: &str = "There was an error fetching entries. Please refresh the page.";
const EXISTENCE_CHECK_FAILED: &str =
    "Failed to check for an existing entry during entry creation.";

/// Service providing business logic for budget entries.
pub struct EntryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all entries ordered by ascending id.
    pub async fn get_entries(&self) -> Result<Vec<entity::entry::Model>, AppError> {
        EntryRepository::new(self.db).get_all().await.map_err(|err| {
            tracing::error!("Failed to fetch entries: {err}");
            AppError::InternalError(FETCH_ENTRIES_FAILED.to_string())
        })
    }

    /// Retrieves a single entry by id.
    ///
    /// Any failure, including storage faults, surfaces as a 404 with the fixed
    /// entry message.
    pub async fn get_entry(&self, id: i32) -> Result<entity::entry::Model, AppError> {
        match EntryRepository::new(self.db).find_by_id(id).await {
            Ok(Some(entry)) => Ok(entry),
            Ok(None) => Err(AppError::NotFound(ENTRY_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to fetch entry {id}: {err}");
                Err(AppError::NotFound(ENTRY_DOES_NOT_EXIST.to_string()))
            }
        }
    }

    /// Retrieves an overview's entries, each with its purchase list.
    pub async fn get_overview_entries(
        &self,
        overview_id: i32,
    ) -> Result<Vec<EntryWithPurchases>, AppError> {
        EntryRepository::new(self.db)
            .get_by_overview_id(overview_id)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch overview {overview_id} entries: {err}");
                AppError::InternalError(FETCH_ENTRIES_FAILED.to_string())
            })
    }

    /// Retrieves a logbook's entries, each with its purchase list.
    pub async fn get_logbook_entries(
        &self,
        logbook_id: i32,
    ) -> Result<Vec<EntryWithPurchases>, AppError> {
        EntryRepository::new(self.db)
            .get_by_logbook_id(logbook_id)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch logbook {logbook_id} entries: {err}");
                AppError::InternalError(FETCH_ENTRIES_FAILED.to_string())
            })
    }

    /// Creates an entry together with its single companion purchase.
    ///
    /// Runs the scoped duplicate-name pre-check first; a duplicate is a normal
    /// outcome, not an error. The storage race between pre-check and insert is
    /// unguarded (there is no unique constraint on entry names).
    ///
    /// # Returns
    /// - `Ok(CreateEntryOutcome::Created)` - Entry and companion purchase created
    /// - `Ok(CreateEntryOutcome::DuplicateName)` - Parent already holds the name
    /// - `Err(AppError::BadRequest)` - Pre-check or insert failure
    pub async fn create(&self, params: CreateEntryParams) -> Result<CreateEntryOutcome, AppError> {
        let repo = EntryRepository::new(self.db);

        let duplicate = repo
            .name_exists(&params.name, params.overview_id, params.logbook_id)
            .await
            .map_err(|err| {
                tracing::error!("Failed existence pre-check for entry '{}': {err}", params.name);
                AppError::BadRequest(EXISTENCE_CHECK_FAILED.to_string())
            })?;

        if duplicate {
            return Ok(CreateEntryOutcome::DuplicateName(params.name));
        }

        let name = params.name.clone();
        let created = repo
            .create_with_initial_purchase(params)
            .await
            .map_err(|err| {
                tracing::error!("Failed to create entry '{name}': {err}");
                AppError::BadRequest(format!("An entry with name \"{name}\" already exists!"))
            })?;

        Ok(CreateEntryOutcome::Created(created))
    }

    /// Applies a partial update, re-running the duplicate pre-check when the
    /// name is being changed.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEntryParams,
    ) -> Result<UpdateEntryOutcome, AppError> {
        let repo = EntryRepository::new(self.db);

        if let Some(name) = &params.name {
            let duplicate = repo
                .name_exists(name, params.overview_id, params.logbook_id)
                .await
                .map_err(|err| {
                    tracing::error!("Failed existence pre-check for entry '{name}': {err}");
                    AppError::BadRequest(EXISTENCE_CHECK_FAILED.to_string())
                })?;

            if duplicate {
                return Ok(UpdateEntryOutcome::DuplicateName(name.clone()));
            }
        }

        match repo.update(id, params).await {
            Ok(Some(updated)) => Ok(UpdateEntryOutcome::Updated(updated)),
            Ok(None) => Ok(UpdateEntryOutcome::NotFound),
            Err(err) => {
                tracing::error!("Failed to update entry {id}: {err}");
                Ok(UpdateEntryOutcome::NotFound)
            }
        }
    }

    /// Deletes an entry, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        match EntryRepository::new(self.db).delete(id).await {
            Ok(Some(deleted_id)) => Ok(deleted_id),
            Ok(None) => Err(AppError::NotFound(ENTRY_DOES_NOT_EXIST.to_string())),
            Err(err) => {
                tracing::error!("Failed to delete entry {id}: {err}");
                Err(AppError::NotFound(ENTRY_DOES_NOT_EXIST.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn create_inserts_entry_with_one_companion_purchase() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let overview = factory::create_overview(db, user.id).await.unwrap();
        let service = EntryService::new(db);

        let outcome = service
            .create(CreateEntryParams {
                name: "Groceries".to_string(),
                overview_id: Some(overview.id),
                logbook_id: None,
            })
            .await
            .unwrap();

        let CreateEntryOutcome::Created(created) = outcome else {
            panic!("expected entry creation to succeed");
        };

        assert_eq!(created.entry.name, "Groceries");
        assert_eq!(created.entry.overview_id, Some(overview.id));
        assert_eq!(created.entry.logbook_id, None);
        assert_eq!(created.purchases.len(), 1);
        assert_eq!(created.purchases[0].entry_id, created.entry.id);

        let purchase_count = entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::EntryId.eq(created.entry.id))
            .count(db)
            .await
            .unwrap();
        assert_eq!(purchase_count, 1);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_in_same_overview() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let overview = factory::create_overview(db, user.id).await.unwrap();
        let service = EntryService::new(db);

        let params = CreateEntryParams {
            name: "Groceries".to_string(),
            overview_id: Some(overview.id),
            logbook_id: None,
        };

        let first = service.create(params.clone()).await.unwrap();
        assert!(matches!(first, CreateEntryOutcome::Created(_)));

        let second = service.create(params).await.unwrap();
        match second {
            CreateEntryOutcome::DuplicateName(name) => assert_eq!(name, "Groceries"),
            other => panic!("expected duplicate outcome, got {other:?}"),
        }

        // The duplicate attempt must not have created a second record.
        let entry_count = entity::prelude::Entry::find()
            .filter(entity::entry::Column::Name.eq("Groceries"))
            .count(db)
            .await
            .unwrap();
        assert_eq!(entry_count, 1);
    }

    #[tokio::test]
    async fn same_name_is_allowed_under_a_different_parent() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let overview = factory::create_overview(db, user.id).await.unwrap();
        let logbook = factory::create_logbook(db, user.id).await.unwrap();
        let service = EntryService::new(db);

        let in_overview = service
            .create(CreateEntryParams {
                name: "Groceries".to_string(),
                overview_id: Some(overview.id),
                logbook_id: None,
            })
            .await
            .unwrap();
        assert!(matches!(in_overview, CreateEntryOutcome::Created(_)));

        let in_logbook = service
            .create(CreateEntryParams {
                name: "Groceries".to_string(),
                overview_id: None,
                logbook_id: Some(logbook.id),
            })
            .await
            .unwrap();
        assert!(matches!(in_logbook, CreateEntryOutcome::Created(_)));
    }

    #[tokio::test]
    async fn entries_without_a_parent_bypass_the_duplicate_check() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EntryService::new(db);

        let params = CreateEntryParams {
            name: "Orphan".to_string(),
            overview_id: None,
            logbook_id: None,
        };

        let first = service.create(params.clone()).await.unwrap();
        assert!(matches!(first, CreateEntryOutcome::Created(_)));

        // No scope id means no pre-check runs, so the same name goes through.
        let second = service.create(params).await.unwrap();
        assert!(matches!(second, CreateEntryOutcome::Created(_)));
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_rejected() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let overview = factory::create_overview(db, user.id).await.unwrap();
        let service = EntryService::new(db);

        let taken = factory::entry::EntryFactory::new(db)
            .name("Rent")
            .overview_id(overview.id)
            .build()
            .await
            .unwrap();
        let target = factory::entry::EntryFactory::new(db)
            .name("Utilities")
            .overview_id(overview.id)
            .build()
            .await
            .unwrap();

        let outcome = service
            .update(
                target.id,
                UpdateEntryParams {
                    name: Some(taken.name.clone()),
                    overview_id: Some(overview.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(matches!(outcome, UpdateEntryOutcome::DuplicateName(_)));
    }

    #[tokio::test]
    async fn update_of_missing_entry_reports_not_found() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EntryService::new(db);

        let outcome = service
            .update(
                9999,
                UpdateEntryParams {
                    total_spent: Some(12.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(matches!(outcome, UpdateEntryOutcome::NotFound));
    }

    #[tokio::test]
    async fn update_applies_only_provided_fields() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, entry) = test_utils::factory::helpers::create_entry_with_dependencies(db)
            .await
            .unwrap();
        let service = EntryService::new(db);

        let outcome = service
            .update(
                entry.id,
                UpdateEntryParams {
                    total_spent: Some(99.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let UpdateEntryOutcome::Updated(updated) = outcome else {
            panic!("expected update to succeed");
        };

        assert_eq!(updated.entry.total_spent, 99.0);
        assert_eq!(updated.entry.name, entry.name);
        assert_eq!(updated.entry.overview_id, entry.overview_id);
    }

    #[tokio::test]
    async fn delete_missing_entry_maps_to_not_found() {
        let test = TestBuilder::new().with_budget_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EntryService::new(db);

        let err = service.delete(9999).await.unwrap_err();

        match err {
            AppError::NotFound(msg) => assert_eq!(msg, ENTRY_DOES_NOT_EXIST),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
