use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Category;

/// Line item of an entry, ordered within the entry by `placement`.
///
/// Every column besides the entry foreign key is nullable: a fresh entry is
/// created together with one completely empty purchase row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub placement: Option<i32>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub entry_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::entry::Entity",
        from = "Column::EntryId",
        to = "super::entry::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Entry,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
