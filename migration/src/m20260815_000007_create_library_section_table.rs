use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_school_table::School;

static FK_LIBRARY_SECTION_SCHOOL_ID: &str = "fk_library_section_school_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LibrarySection::Table)
                    .if_not_exists()
                    .col(pk_auto(LibrarySection::Id))
                    .col(integer(LibrarySection::SchoolId))
                    .col(string(LibrarySection::Name))
                    .col(timestamp(LibrarySection::CreatedAt))
                    .col(timestamp(LibrarySection::UpdatedAt))
                    .col(timestamp_null(LibrarySection::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIBRARY_SECTION_SCHOOL_ID)
                    .from_tbl(LibrarySection::Table)
                    .from_col(LibrarySection::SchoolId)
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
                    .name(FK_LIBRARY_SECTION_SCHOOL_ID)
                    .table(LibrarySection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LibrarySection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LibrarySection {
    Table,
    Id,
    SchoolId,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
