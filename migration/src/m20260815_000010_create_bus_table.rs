use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_school_table::School;

static FK_BUS_SCHOOL_ID: &str = "fk_bus_school_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bus::Table)
                    .if_not_exists()
                    .col(pk_auto(Bus::Id))
                    .col(integer(Bus::SchoolId))
                    .col(string_uniq(Bus::RegistrationNumber))
                    .col(integer_null(Bus::Capacity))
                    .col(timestamp(Bus::CreatedAt))
                    .col(timestamp(Bus::UpdatedAt))
                    .col(timestamp_null(Bus::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_SCHOOL_ID)
                    .from_tbl(Bus::Table)
                    .from_col(Bus::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_SCHOOL_ID)
                    .table(Bus::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bus {
    Table,
    Id,
    SchoolId,
    RegistrationNumber,
    Capacity,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
