//! Entry parameter, wrapper, and outcome types.

use crate::dto::entry::{CreateEntryDto, UpdateEntryDto};

/// Entry together with its purchases, ordered by placement ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryWithPurchases {
    pub entry: entity::entry::Model,
    pub purchases: Vec<entity::purchase::Model>,
}

/// Parameters for creating an entry.
///
/// At most one of `overview_id`/`logbook_id` is expected; the duplicate-name
/// pre-check is scoped to whichever is present.
#[derive(Debug, Clone)]
pub struct CreateEntryParams {
    pub name: String,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
}

impl CreateEntryParams {
    pub fn from_dto(dto: CreateEntryDto) -> Self {
        Self {
            name: dto.name,
            overview_id: dto.overview_id,
            logbook_id: dto.logbook_id,
        }
    }
}

/// Parameters for a partial entry update.
#[derive(Debug, Clone, Default)]
pub struct UpdateEntryParams {
    pub name: Option<String>,
    pub total_spent: Option<f64>,
    pub budget: Option<f64>,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
}

impl UpdateEntryParams {
    pub fn from_dto(dto: UpdateEntryDto) -> Self {
        Self {
            name: dto.name,
            total_spent: dto.total_spent,
            budget: dto.budget,
            overview_id: dto.overview_id,
            logbook_id: dto.logbook_id,
        }
    }
}

/// Result of an entry create attempt.
///
/// A duplicate name is a normal outcome of the pre-check, not an error, so it
/// is expressed as a variant instead of being thrown through the error channel.
#[derive(Debug)]
pub enum CreateEntryOutcome {
    /// Entry created together with its single companion purchase.
    Created(EntryWithPurchases),
    /// The scoped parent already holds an entry with this name.
    DuplicateName(String),
}

/// Result of an entry update attempt.
#[derive(Debug)]
pub enum UpdateEntryOutcome {
    /// Entry updated; carries the record with its purchase list.
    Updated(EntryWithPurchases),
    /// The scoped parent already holds an entry with the requested name.
    DuplicateName(String),
    /// No entry exists with the given id.
    NotFound,
}
