//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an entry inside an overview with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as owner)
/// 2. Overview
/// 3. Entry
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, overview, entry))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_entry_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::overview::Model,
        entity::entry::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let overview = crate::factory::overview::create_overview(db, user.id).await?;
    let entry = crate::factory::entry::create_entry_in_overview(db, overview.id).await?;

    Ok((user, overview, entry))
}

/// Creates a logbook entry with all dependencies.
///
/// Same shape as [`create_entry_with_dependencies`] but the entry lives in a
/// logbook rather than an overview.
pub async fn create_logbook_entry_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::logbook::Model,
        entity::entry::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let logbook = crate::factory::logbook::create_logbook(db, user.id).await?;
    let entry = crate::factory::entry::create_entry_in_logbook(db, logbook.id).await?;

    Ok((user, logbook, entry))
}
