use crate::data::logbook::LogbookRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod name_exists;
