use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod find_by_email;
mod update;
mod verification;
