use super::*;
use test_utils::factory;

/// Tests finding a user by email address.
///
/// Expected: Ok(Some) for a stored address, Ok(None) for an unknown one.
#[tokio::test]
async fn finds_stored_user_and_misses_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user_with_email(db, "jane@example.com").await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("jane@example.com").await?;
    assert_eq!(found.map(|user| user.id), Some(stored.id));

    let missing = repo.find_by_email("ghost@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
