use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000002_create_overview_table::Overview, m20260106_000003_create_logbook_table::Logbook,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

// No unique index on (name, parent): duplicate protection is an
// application-level pre-check, so concurrent creates can still race.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entry::Table)
                    .if_not_exists()
                    .col(pk_auto(Entry::Id))
                    .col(string(Entry::Name))
                    .col(double(Entry::TotalSpent).default(0))
                    .col(double_null(Entry::Budget))
                    .col(integer_null(Entry::OverviewId))
                    .col(integer_null(Entry::LogbookId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_overview_id")
                            .from(Entry::Table, Entry::OverviewId)
                            .to(Overview::Table, Overview::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_logbook_id")
                            .from(Entry::Table, Entry::LogbookId)
                            .to(Logbook::Table, Logbook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entry {
    Table,
    Id,
    Name,
    TotalSpent,
    Budget,
    OverviewId,
    LogbookId,
}
