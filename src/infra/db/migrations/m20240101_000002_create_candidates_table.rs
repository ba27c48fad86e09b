//! Migration: Create the candidates table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Candidates::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Candidates::FirstName).string().not_null())
                    .col(ColumnDef::new(Candidates::LastName).string().not_null())
                    .col(ColumnDef::new(Candidates::Email).string().not_null())
                    .col(
                        ColumnDef::new(Candidates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing and export walk candidates in insertion order
        manager
            .create_index(
                Index::create()
                    .name("idx_candidates_created_at")
                    .table(Candidates::Table)
                    .col(Candidates::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_candidates_created_at")
                    .table(Candidates::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Candidates {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}
