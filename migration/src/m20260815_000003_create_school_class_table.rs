use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_school_table::School;

static FK_SCHOOL_CLASS_SCHOOL_ID: &str = "fk_school_class_school_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolClass::Table)
                    .if_not_exists()
                    .col(pk_auto(SchoolClass::Id))
                    .col(integer(SchoolClass::SchoolId))
                    .col(string(SchoolClass::Name))
                    .col(timestamp(SchoolClass::CreatedAt))
                    .col(timestamp(SchoolClass::UpdatedAt))
                    .col(timestamp_null(SchoolClass::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCHOOL_CLASS_SCHOOL_ID)
                    .from_tbl(SchoolClass::Table)
                    .from_col(SchoolClass::SchoolId)
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
                    .name(FK_SCHOOL_CLASS_SCHOOL_ID)
                    .table(SchoolClass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SchoolClass::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SchoolClass {
    Table,
    Id,
    SchoolId,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
