use crate::{data::entry::EntryRepository, model::entry::CreateEntryParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_with_initial_purchase;
mod get_by_parent;
mod name_exists;
