use super::*;
use entity::sea_orm_active_enums::Theme;
use test_utils::factory;

/// Tests the partial-update contract.
///
/// Verifies only fields provided as Some are written; everything else keeps
/// its stored value.
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .username("jane")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                theme: Some(Theme::Light),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.theme, Theme::Light);
    assert_eq!(updated.email, "jane@example.com");
    assert_eq!(updated.username, "jane");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None) rather than an error.
#[tokio::test]
async fn update_of_missing_user_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(9999, UpdateUserParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests replacing the stored password hash.
#[tokio::test]
async fn update_password_replaces_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_password(user.id, "$argon2id$new-hash".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.password, "$argon2id$new-hash");

    Ok(())
}
