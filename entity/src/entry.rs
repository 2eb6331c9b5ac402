use sea_orm::entity::prelude::*;

/// Named budget line belonging to exactly one overview or logbook.
///
/// The parent foreign keys are mutually exclusive by convention; name
/// uniqueness within a parent is enforced by an application-level pre-check,
/// not a database constraint.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub total_spent: f64,
    pub budget: Option<f64>,
    pub overview_id: Option<i32>,
    pub logbook_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::overview::Entity",
        from = "Column::OverviewId",
        to = "super::overview::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Overview,
    #[sea_orm(
        belongs_to = "super::logbook::Entity",
        from = "Column::LogbookId",
        to = "super::logbook::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Logbook,
    #[sea_orm(has_many = "super::purchase::Entity")]
    Purchase,
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

impl Related<super::purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
