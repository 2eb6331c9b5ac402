use super::*;

/// Tests the duplicate check scoped to an overview.
#[tokio::test]
async fn detects_duplicate_within_same_overview() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let overview = factory::create_overview(db, user.id).await?;
    factory::entry::EntryFactory::new(db)
        .name("Groceries")
        .overview_id(overview.id)
        .build()
        .await?;

    let repo = EntryRepository::new(db);

    assert!(repo.name_exists("Groceries", Some(overview.id), None).await?);
    assert!(!repo.name_exists("Rent", Some(overview.id), None).await?);

    Ok(())
}

/// Tests that the check does not cross parent boundaries.
#[tokio::test]
async fn name_in_another_overview_is_not_a_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_overview(db, user.id).await?;
    let second = factory::create_overview(db, user.id).await?;
    factory::entry::EntryFactory::new(db)
        .name("Groceries")
        .overview_id(first.id)
        .build()
        .await?;

    let repo = EntryRepository::new(db);

    assert!(!repo.name_exists("Groceries", Some(second.id), None).await?);

    Ok(())
}

/// Tests the logbook-scoped variant of the check.
#[tokio::test]
async fn detects_duplicate_within_same_logbook() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let logbook = factory::create_logbook(db, user.id).await?;
    factory::entry::EntryFactory::new(db)
        .name("Trip")
        .logbook_id(logbook.id)
        .build()
        .await?;

    let repo = EntryRepository::new(db);

    assert!(repo.name_exists("Trip", None, Some(logbook.id)).await?);

    Ok(())
}

/// Tests the unscoped case.
///
/// With neither parent id there is nothing to scope against, so the name
/// always counts as free even when an identical unparented entry exists.
#[tokio::test]
async fn no_parent_scope_skips_the_check() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::entry::EntryFactory::new(db)
        .name("Orphan")
        .build()
        .await?;

    let repo = EntryRepository::new(db);

    assert!(!repo.name_exists("Orphan", None, None).await?);

    Ok(())
}
