use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Currency, Theme};

/// Registered account. The `password` column holds an argon2 PHC hash and
/// `verification_code` the pending email challenge; neither is ever serialized
/// to a client (see the safe-user DTO projection in the API crate).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub verification_code: Option<String>,
    pub email_verified: bool,
    pub mobile_number: Option<String>,
    pub currency: Currency,
    pub theme: Theme,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::overview::Entity")]
    Overview,
    #[sea_orm(has_many = "super::logbook::Entity")]
    Logbook,
    #[sea_orm(has_many = "super::bug_report::Entity")]
    BugReport,
}

impl Related<super::overview::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Overview.def()
    }
}

impl Related<super::logbook::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logbook.def()
    }
}

impl Related<super::bug_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BugReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
