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
                    .table(Logbook::Table)
                    .if_not_exists()
                    .col(pk_auto(Logbook::Id))
                    .col(string(Logbook::Name))
                    .col(integer(Logbook::OwnerId))
                    .col(
                        timestamp(Logbook::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Logbook::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_logbook_owner_id")
                            .from(Logbook::Table, Logbook::OwnerId)
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
            .drop_table(Table::drop().table(Logbook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Logbook {
    Table,
    Id,
    Name,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
