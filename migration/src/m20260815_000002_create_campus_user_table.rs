use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_school_table::School;

static IDX_CAMPUS_USER_SCHOOL_ID: &str = "idx_campus_user_school_id";
static FK_CAMPUS_USER_SCHOOL_ID: &str = "fk_campus_user_school_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampusUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CampusUser::Id))
                    .col(integer(CampusUser::SchoolId))
                    .col(string(CampusUser::DisplayName))
                    .col(string_uniq(CampusUser::Email))
                    .col(timestamp(CampusUser::CreatedAt))
                    .col(timestamp(CampusUser::UpdatedAt))
                    .col(timestamp_null(CampusUser::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAMPUS_USER_SCHOOL_ID)
                    .table(CampusUser::Table)
                    .col(CampusUser::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAMPUS_USER_SCHOOL_ID)
                    .from_tbl(CampusUser::Table)
                    .from_col(CampusUser::SchoolId)
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
                    .name(FK_CAMPUS_USER_SCHOOL_ID)
                    .table(CampusUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAMPUS_USER_SCHOOL_ID)
                    .table(CampusUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CampusUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CampusUser {
    Table,
    Id,
    SchoolId,
    DisplayName,
    Email,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
