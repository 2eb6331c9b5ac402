use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Username))
                    .col(string(User::Password))
                    .col(string_null(User::VerificationCode))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(string_null(User::MobileNumber))
                    .col(string(User::Currency).default("USD"))
                    .col(string(User::Theme).default("dark"))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    Password,
    VerificationCode,
    EmailVerified,
    MobileNumber,
    Currency,
    Theme,
    CreatedAt,
    UpdatedAt,
}
