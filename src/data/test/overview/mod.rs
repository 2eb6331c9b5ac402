use crate::{
    data::overview::OverviewRepository,
    model::overview::{CreateOverviewParams, UpdateOverviewParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
