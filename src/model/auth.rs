//! Outcome types for the authentication flows.
//!
//! Business-rule rejections (taken email, wrong password, bad code) are
//! ordinary outcomes of these operations, not errors, so they are modeled as
//! enum variants the controller maps to responses.

/// Result of a registration attempt.
#[derive(Debug)]
pub enum RegisterOutcome {
    /// Account created; carries the stored user record.
    Registered(entity::user::Model),
    /// An account with the submitted email already exists.
    EmailTaken,
}

/// Result of a credentials check during login.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials matched; a fresh verification code has been stored.
    VerificationCodeSent,
    /// The submitted password did not match.
    InvalidCredentials,
    /// No account exists for the submitted email.
    AccountMissing,
}

/// Result of a verification-code check.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// Code matched; carries the (possibly updated) user record.
    Verified(entity::user::Model),
    /// The submitted code did not match the stored one.
    InvalidCode,
    /// The account's email address is already verified.
    AlreadyVerified,
    /// No account exists for the submitted email.
    AccountMissing,
}

/// Result of requesting a fresh verification code.
#[derive(Debug)]
pub enum SendCodeOutcome {
    /// A new code was generated and stored.
    CodeSent,
    /// No account exists for the submitted email.
    AccountMissing,
}
