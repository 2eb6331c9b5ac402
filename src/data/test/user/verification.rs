use super::*;
use test_utils::factory;

/// Tests storing and clearing the pending verification code.
#[tokio::test]
async fn set_verification_code_stores_and_clears() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let stored = repo
        .set_verification_code(user.id, Some("654321".to_string()))
        .await?
        .unwrap();
    assert_eq!(stored.verification_code.as_deref(), Some("654321"));

    let cleared = repo.set_verification_code(user.id, None).await?.unwrap();
    assert!(cleared.verification_code.is_none());

    Ok(())
}

/// Tests marking an email verified.
///
/// Verifies the flag is set and the pending code cleared in one step.
#[tokio::test]
async fn mark_email_verified_sets_flag_and_clears_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .verification_code("123456")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let verified = repo.mark_email_verified(user.id).await?.unwrap();

    assert!(verified.email_verified);
    assert!(verified.verification_code.is_none());

    Ok(())
}
