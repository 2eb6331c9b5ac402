use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_entry_table::Entry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Purchase::Table)
                    .if_not_exists()
                    .col(pk_auto(Purchase::Id))
                    .col(integer_null(Purchase::Placement))
                    .col(string_null(Purchase::Category))
                    .col(string_null(Purchase::Description))
                    .col(double_null(Purchase::Cost))
                    .col(integer(Purchase::EntryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_entry_id")
                            .from(Purchase::Table, Purchase::EntryId)
                            .to(Entry::Table, Entry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Purchase {
    Table,
    Id,
    Placement,
    Category,
    Description,
    Cost,
    EntryId,
}
