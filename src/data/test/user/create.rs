use super::*;

fn registration_params(email: &str, username: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        username: username.to_string(),
        password: "$argon2id$stored-hash".to_string(),
        verification_code: "123456".to_string(),
    }
}

/// Tests creating a new user at registration.
///
/// Verifies the stored record carries the hash and pending code, with the
/// email unverified and default preferences applied.
#[tokio::test]
async fn creates_user_with_pending_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(registration_params("jane@example.com", "jane"))
        .await?;

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.username, "jane");
    assert_eq!(user.password, "$argon2id$stored-hash");
    assert_eq!(user.verification_code.as_deref(), Some("123456"));
    assert!(!user.email_verified);

    Ok(())
}

/// Tests the storage-level uniqueness backstop.
///
/// Verifies a second insert with the same email is rejected by the unique
/// index even though no application pre-check ran.
#[tokio::test]
async fn duplicate_email_insert_is_rejected_by_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(registration_params("jane@example.com", "jane"))
        .await?;

    let result = repo
        .create(registration_params("jane@example.com", "janet"))
        .await;

    assert!(result.is_err());

    Ok(())
}
