//! Authentication service: registration, two-step login, and email
//! verification codes.
//!
//! Passwords are hashed with argon2 and only the PHC hash string is stored.
//! Verification codes are 6-digit numeric challenges persisted on the account
//! row; delivering them by email is an external concern. Access-token
//! issuance and verification are currently disabled, so a successful
//! code check simply returns the account.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        auth::{LoginOutcome, RegisterOutcome, SendCodeOutcome, VerifyOutcome},
        user::CreateUserParams,
    },
};

/// Service providing business logic for authentication flows.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Pre-checks the email for an existing account, hashes the password, and
    /// stores the user with a fresh verification code awaiting confirmation.
    ///
    /// # Returns
    /// - `Ok(RegisterOutcome::Registered)` - Account created
    /// - `Ok(RegisterOutcome::EmailTaken)` - Email already has an account
    /// - `Err(AppError)` - Hashing or storage failure
    pub async fn register(
        &self,
        email: String,
        username: String,
        password: String,
    ) -> Result<RegisterOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Ok(RegisterOutcome::EmailTaken);
        }

        let password_hash = hash_password(&password)?;
        let verification_code = generate_verification_code();

        let user = user_repo
            .create(CreateUserParams {
                email,
                username,
                password: password_hash,
                verification_code,
            })
            .await?;

        Ok(RegisterOutcome::Registered(user))
    }

    /// First login step: checks credentials and issues a fresh code.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome::VerificationCodeSent)` - Credentials matched
    /// - `Ok(LoginOutcome::InvalidCredentials)` - Password mismatch
    /// - `Ok(LoginOutcome::AccountMissing)` - No account for the email
    /// - `Err(AppError)` - Storage failure
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(LoginOutcome::AccountMissing);
        };

        if !verify_password(password, &user.password) {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        let verification_code = generate_verification_code();
        user_repo
            .set_verification_code(user.id, Some(verification_code))
            .await?;

        Ok(LoginOutcome::VerificationCodeSent)
    }

    /// Confirms a registration with the emailed code.
    ///
    /// On success the account's email is marked verified and the code is
    /// cleared.
    pub async fn verify_registration(
        &self,
        email: &str,
        verification_code: &str,
    ) -> Result<VerifyOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(VerifyOutcome::AccountMissing);
        };

        if user.email_verified {
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        if user.verification_code.as_deref() != Some(verification_code) {
            return Ok(VerifyOutcome::InvalidCode);
        }

        let Some(updated) = user_repo.mark_email_verified(user.id).await? else {
            return Ok(VerifyOutcome::AccountMissing);
        };

        Ok(VerifyOutcome::Verified(updated))
    }

    /// Second login step: confirms the emailed code and clears it.
    pub async fn verify_login(
        &self,
        email: &str,
        verification_code: &str,
    ) -> Result<VerifyOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(VerifyOutcome::AccountMissing);
        };

        if user.verification_code.as_deref() != Some(verification_code) {
            return Ok(VerifyOutcome::InvalidCode);
        }

        let Some(updated) = user_repo.set_verification_code(user.id, None).await? else {
            return Ok(VerifyOutcome::AccountMissing);
        };

        Ok(VerifyOutcome::Verified(updated))
    }

    /// Generates and stores a fresh verification code for the account.
    pub async fn send_new_verification_code(
        &self,
        email: &str,
    ) -> Result<SendCodeOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(SendCodeOutcome::AccountMissing);
        };

        let verification_code = generate_verification_code();
        user_repo
            .set_verification_code(user.id, Some(verification_code))
            .await?;

        Ok(SendCodeOutcome::CodeSent)
    }
}

/// Hashes a plaintext password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {err}");
            AppError::InternalError("Failed to process password. Please try again.".to_string())
        })
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// An unparseable stored hash counts as a mismatch rather than an error; the
/// caller cannot do anything more useful with a corrupt hash than reject the
/// login.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Generates a 6-digit numeric verification code, zero-padded.
fn generate_verification_code() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn hashes_verify_and_reject() {
        let hash = hash_password("hunter2").unwrap();

        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn corrupt_stored_hash_counts_as_mismatch() {
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }

    #[test]
    fn verification_codes_are_six_digits() {
        for _ in 0..32 {
            let code = generate_verification_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::user::create_user_with_email(db, "taken@example.com")
            .await
            .unwrap();
        let service = AuthService::new(db);

        let outcome = service
            .register(
                existing.email,
                "newcomer".to_string(),
                "password".to_string(),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, RegisterOutcome::EmailTaken));
    }

    #[tokio::test]
    async fn register_stores_hash_and_pending_code() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);

        let outcome = service
            .register(
                "fresh@example.com".to_string(),
                "fresh".to_string(),
                "hunter2".to_string(),
            )
            .await
            .unwrap();

        let RegisterOutcome::Registered(user) = outcome else {
            panic!("expected registration to succeed");
        };

        assert_ne!(user.password, "hunter2");
        assert!(verify_password("hunter2", &user.password));
        assert_eq!(user.verification_code.as_ref().unwrap().len(), 6);
        assert!(!user.email_verified);
    }

    #[tokio::test]
    async fn verify_registration_marks_email_verified_and_clears_code() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .verification_code("424242")
            .build()
            .await
            .unwrap();
        let service = AuthService::new(db);

        let outcome = service
            .verify_registration(&user.email, "424242")
            .await
            .unwrap();

        let VerifyOutcome::Verified(updated) = outcome else {
            panic!("expected verification to succeed");
        };

        assert!(updated.email_verified);
        assert!(updated.verification_code.is_none());
    }

    #[tokio::test]
    async fn verify_registration_rejects_wrong_code() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .verification_code("424242")
            .build()
            .await
            .unwrap();
        let service = AuthService::new(db);

        let outcome = service
            .verify_registration(&user.email, "000000")
            .await
            .unwrap();

        assert!(matches!(outcome, VerifyOutcome::InvalidCode));
    }

    #[tokio::test]
    async fn login_rotates_verification_code_on_success() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hash = hash_password("hunter2").unwrap();
        let user = factory::user::UserFactory::new(db)
            .password(hash)
            .build()
            .await
            .unwrap();
        let service = AuthService::new(db);

        let outcome = service.login(&user.email, "hunter2").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::VerificationCodeSent));

        let stored = UserRepository::new(db)
            .find_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.verification_code.is_some());
    }

    #[tokio::test]
    async fn login_rejects_bad_password_and_unknown_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hash = hash_password("hunter2").unwrap();
        let user = factory::user::UserFactory::new(db)
            .password(hash)
            .build()
            .await
            .unwrap();
        let service = AuthService::new(db);

        let wrong_password = service.login(&user.email, "nope").await.unwrap();
        assert!(matches!(wrong_password, LoginOutcome::InvalidCredentials));

        let unknown = service.login("ghost@example.com", "nope").await.unwrap();
        assert!(matches!(unknown, LoginOutcome::AccountMissing));
    }
}
