//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let overview = factory::overview::create_overview(&db, user.id).await?;
//!
//!     // Create an entry with its full container hierarchy
//!     let (user, overview, entry) = factory::helpers::create_entry_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("custom@example.com")
//!     .email_verified(true)
//!     .build()
//!     .await?;
//! ```

pub mod entry;
pub mod helpers;
pub mod logbook;
pub mod overview;
pub mod purchase;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use entry::{create_entry_in_logbook, create_entry_in_overview};
pub use logbook::create_logbook;
pub use overview::create_overview;
pub use purchase::create_purchase;
pub use user::create_user;
