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
                    .col(string(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_null(User::FirstName))
                    .col(string_null(User::LastName))
                    .col(text_null(User::DescriptionMarkdown))
                    .col(string_null(User::Phone))
                    .col(string_null(User::ProfilePicture))
                    .col(date_null(User::DateOfBirth))
                    .col(string_null(User::Language))
                    .col(string_null(User::Currency))
                    .col(json_null(User::Address))
                    .col(integer(User::Role).default(2))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(boolean(User::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(User::LastLogin))
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
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    DescriptionMarkdown,
    Phone,
    ProfilePicture,
    DateOfBirth,
    Language,
    Currency,
    Address,
    Role,
    EmailVerified,
    IsActive,
    CreatedAt,
    LastLogin,
}
