//! SeaORM entity models for the Kujira budgeting schema.

pub mod prelude;

pub mod bug_report;
pub mod entry;
pub mod logbook;
pub mod overview;
pub mod purchase;
pub mod sea_orm_active_enums;
pub mod user;
