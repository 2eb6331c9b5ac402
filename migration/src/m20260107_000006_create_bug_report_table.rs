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
                    .table(BugReport::Table)
                    .if_not_exists()
                    .col(pk_auto(BugReport::Id))
                    .col(string(BugReport::Issue))
                    .col(text_null(BugReport::Details))
                    .col(integer(BugReport::OwnerId))
                    .col(
                        timestamp(BugReport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_report_owner_id")
                            .from(BugReport::Table, BugReport::OwnerId)
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
            .drop_table(Table::drop().table(BugReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BugReport {
    Table,
    Id,
    Issue,
    Details,
    OwnerId,
    CreatedAt,
}
