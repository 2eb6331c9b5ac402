//! Logbook parameter and outcome types.

/// Parameters for creating a logbook.
#[derive(Debug, Clone)]
pub struct CreateLogbookParams {
    pub name: String,
    pub owner_id: i32,
}

/// Result of a logbook create attempt.
#[derive(Debug)]
pub enum CreateLogbookOutcome {
    /// Logbook created.
    Created(entity::logbook::Model),
    /// The owner already has a logbook with this name.
    DuplicateName(String),
}

/// Result of a logbook update attempt.
#[derive(Debug)]
pub enum UpdateLogbookOutcome {
    /// Logbook updated.
    Updated(entity::logbook::Model),
    /// The owner already has a logbook with the requested name.
    DuplicateName(String),
    /// No logbook exists with the given id.
    NotFound,
}
