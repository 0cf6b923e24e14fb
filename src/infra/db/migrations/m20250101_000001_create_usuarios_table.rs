//! Migration: Create the usuarios table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Nombre).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Password)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    Id,
    Nombre,
    Email,
    Password,
}
