//! Create `users` table for the profile-style user records.
//!
//! Lives in its own database file, so the table name does not clash with
//! the account-style `users` table. Email is not unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::FirstName, 32))
                    .col(string_len(Users::LastName, 32))
                    .col(date(Users::Birthday))
                    .col(string_len(Users::Email, 128))
                    .col(string_len(Users::Address, 128))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, FirstName, LastName, Birthday, Email, Address }
