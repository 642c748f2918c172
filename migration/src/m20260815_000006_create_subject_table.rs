use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_school_table::School;

static FK_SUBJECT_SCHOOL_ID: &str = "fk_subject_school_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(integer(Subject::SchoolId))
                    .col(string(Subject::Name))
                    .col(timestamp(Subject::CreatedAt))
                    .col(timestamp(Subject::UpdatedAt))
                    .col(timestamp_null(Subject::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBJECT_SCHOOL_ID)
                    .from_tbl(Subject::Table)
                    .from_col(Subject::SchoolId)
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
                    .name(FK_SUBJECT_SCHOOL_ID)
                    .table(Subject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    Table,
    Id,
    SchoolId,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
