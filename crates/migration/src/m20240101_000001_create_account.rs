//! Create `account` table.
//!
//! Single customer-record table keyed by an auto-incrementing integer id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_len(Account::Name, 64).not_null())
                    .col(string_len(Account::Email, 64).not_null())
                    .col(string_len(Account::Address, 256).not_null())
                    .col(string_len_null(Account::PhoneNumber, 32))
                    .col(date(Account::DateJoined).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Account::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Account { Table, Id, Name, Email, Address, PhoneNumber, DateJoined }
