use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Overview::Table)
                    .if_not_exists()
                    .col(pk_auto(Overview::Id))
                    .col(double(Overview::Income))
                    .col(double(Overview::Savings).default(0))
                    .col(integer(Overview::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_overview_owner_id")
                            .from(Overview::Table, Overview::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Overview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Overview {
    Table,
    Id,
    Income,
    Savings,
    OwnerId,
}
