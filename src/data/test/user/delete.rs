use super::*;
use test_utils::factory;

/// Tests deleting an existing user.
///
/// Expected: Ok(Some(id)) echoing the removed primary key.
#[tokio::test]
async fn delete_returns_removed_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert_eq!(deleted, Some(user.id));
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None), no rows affected.
#[tokio::test]
async fn delete_of_missing_user_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(deleted.is_none());

    Ok(())
}
