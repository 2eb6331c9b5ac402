use super::*;

/// Tests the owner-scoped duplicate check for logbook names.
#[tokio::test]
async fn detects_duplicate_for_same_owner_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Logbook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::logbook::LogbookFactory::new(db, owner.id)
        .name("Travel")
        .build()
        .await?;

    let repo = LogbookRepository::new(db);

    assert!(repo.name_exists("Travel", owner.id).await?);
    assert!(!repo.name_exists("Travel", other.id).await?);
    assert!(!repo.name_exists("Groceries", owner.id).await?);

    Ok(())
}
