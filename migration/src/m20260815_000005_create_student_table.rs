use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School,
    m20260815_000004_create_class_section_table::ClassSection,
};

static IDX_STUDENT_SCHOOL_ID: &str = "idx_student_school_id";
static FK_STUDENT_SCHOOL_ID: &str = "fk_student_school_id";
static FK_STUDENT_CLASS_SECTION_ID: &str = "fk_student_class_section_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer(Student::SchoolId))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(integer_null(Student::ClassSectionId))
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .col(timestamp_null(Student::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_SCHOOL_ID)
                    .table(Student::Table)
                    .col(Student::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_SCHOOL_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_CLASS_SECTION_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::ClassSectionId)
                    .to_tbl(ClassSection::Table)
                    .to_col(ClassSection::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_CLASS_SECTION_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_SCHOOL_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_SCHOOL_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    SchoolId,
    FirstName,
    LastName,
    ClassSectionId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
