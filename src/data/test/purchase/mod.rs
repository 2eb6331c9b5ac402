use crate::data::purchase::PurchaseRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_many;
mod get_by_entry_id;
