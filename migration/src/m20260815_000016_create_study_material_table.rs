use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School,
    m20260815_000002_create_campus_user_table::CampusUser,
    m20260815_000015_create_study_material_section_table::StudyMaterialSection,
};

static IDX_STUDY_MATERIAL_SECTION_ID: &str = "idx_study_material_section_id";
static FK_STUDY_MATERIAL_SCHOOL_ID: &str = "fk_study_material_school_id";
static FK_STUDY_MATERIAL_SECTION_ID: &str = "fk_study_material_section_id";
static FK_STUDY_MATERIAL_UPLOADED_BY: &str = "fk_study_material_uploaded_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyMaterial::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyMaterial::Id))
                    .col(integer(StudyMaterial::SchoolId))
                    .col(integer(StudyMaterial::SectionId))
                    .col(string(StudyMaterial::Title))
                    .col(string_len(StudyMaterial::MaterialType, 8))
                    .col(string(StudyMaterial::FilePath))
                    .col(string_null(StudyMaterial::HlsPath))
                    .col(big_integer_null(StudyMaterial::FileSize))
                    .col(integer_null(StudyMaterial::Duration))
                    .col(boolean(StudyMaterial::IsPublished))
                    .col(integer(StudyMaterial::SortOrder))
                    .col(integer(StudyMaterial::UploadedBy))
                    .col(timestamp(StudyMaterial::CreatedAt))
                    .col(timestamp(StudyMaterial::UpdatedAt))
                    .col(timestamp_null(StudyMaterial::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDY_MATERIAL_SECTION_ID)
                    .table(StudyMaterial::Table)
                    .col(StudyMaterial::SectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SCHOOL_ID)
                    .from_tbl(StudyMaterial::Table)
                    .from_col(StudyMaterial::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SECTION_ID)
                    .from_tbl(StudyMaterial::Table)
                    .from_col(StudyMaterial::SectionId)
                    .to_tbl(StudyMaterialSection::Table)
                    .to_col(StudyMaterialSection::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_UPLOADED_BY)
                    .from_tbl(StudyMaterial::Table)
                    .from_col(StudyMaterial::UploadedBy)
                    .to_tbl(CampusUser::Table)
                    .to_col(CampusUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_STUDY_MATERIAL_UPLOADED_BY,
            FK_STUDY_MATERIAL_SECTION_ID,
            FK_STUDY_MATERIAL_SCHOOL_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(StudyMaterial::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDY_MATERIAL_SECTION_ID)
                    .table(StudyMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudyMaterial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudyMaterial {
    Table,
    Id,
    SchoolId,
    SectionId,
    Title,
    MaterialType,
    FilePath,
    HlsPath,
    FileSize,
    Duration,
    IsPublished,
    SortOrder,
    UploadedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
