use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School,
    m20260815_000002_create_campus_user_table::CampusUser,
    m20260815_000003_create_school_class_table::SchoolClass,
    m20260815_000004_create_class_section_table::ClassSection,
    m20260815_000006_create_subject_table::Subject,
};

static IDX_STUDY_MATERIAL_SECTION_CLASS_ID: &str = "idx_study_material_section_class_id";
static FK_STUDY_MATERIAL_SECTION_SCHOOL_ID: &str = "fk_study_material_section_school_id";
static FK_STUDY_MATERIAL_SECTION_CLASS_ID: &str = "fk_study_material_section_class_id";
static FK_STUDY_MATERIAL_SECTION_CLASS_SECTION_ID: &str =
    "fk_study_material_section_class_section_id";
static FK_STUDY_MATERIAL_SECTION_SUBJECT_ID: &str = "fk_study_material_section_subject_id";
static FK_STUDY_MATERIAL_SECTION_CREATED_BY: &str = "fk_study_material_section_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyMaterialSection::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyMaterialSection::Id))
                    .col(integer(StudyMaterialSection::SchoolId))
                    .col(integer(StudyMaterialSection::ClassId))
                    .col(integer_null(StudyMaterialSection::ClassSectionId))
                    .col(integer(StudyMaterialSection::SubjectId))
                    .col(string(StudyMaterialSection::Title))
                    .col(boolean(StudyMaterialSection::IsPublished))
                    .col(integer(StudyMaterialSection::SortOrder))
                    .col(integer(StudyMaterialSection::CreatedBy))
                    .col(timestamp(StudyMaterialSection::CreatedAt))
                    .col(timestamp(StudyMaterialSection::UpdatedAt))
                    .col(timestamp_null(StudyMaterialSection::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDY_MATERIAL_SECTION_CLASS_ID)
                    .table(StudyMaterialSection::Table)
                    .col(StudyMaterialSection::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SECTION_SCHOOL_ID)
                    .from_tbl(StudyMaterialSection::Table)
                    .from_col(StudyMaterialSection::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SECTION_CLASS_ID)
                    .from_tbl(StudyMaterialSection::Table)
                    .from_col(StudyMaterialSection::ClassId)
                    .to_tbl(SchoolClass::Table)
                    .to_col(SchoolClass::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SECTION_CLASS_SECTION_ID)
                    .from_tbl(StudyMaterialSection::Table)
                    .from_col(StudyMaterialSection::ClassSectionId)
                    .to_tbl(ClassSection::Table)
                    .to_col(ClassSection::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SECTION_SUBJECT_ID)
                    .from_tbl(StudyMaterialSection::Table)
                    .from_col(StudyMaterialSection::SubjectId)
                    .to_tbl(Subject::Table)
                    .to_col(Subject::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDY_MATERIAL_SECTION_CREATED_BY)
                    .from_tbl(StudyMaterialSection::Table)
                    .from_col(StudyMaterialSection::CreatedBy)
                    .to_tbl(CampusUser::Table)
                    .to_col(CampusUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_STUDY_MATERIAL_SECTION_CREATED_BY,
            FK_STUDY_MATERIAL_SECTION_SUBJECT_ID,
            FK_STUDY_MATERIAL_SECTION_CLASS_SECTION_ID,
            FK_STUDY_MATERIAL_SECTION_CLASS_ID,
            FK_STUDY_MATERIAL_SECTION_SCHOOL_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(StudyMaterialSection::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDY_MATERIAL_SECTION_CLASS_ID)
                    .table(StudyMaterialSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(StudyMaterialSection::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudyMaterialSection {
    Table,
    Id,
    SchoolId,
    ClassId,
    ClassSectionId,
    SubjectId,
    Title,
    IsPublished,
    SortOrder,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
