use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000002_create_campus_user_table::CampusUser,
    m20260815_000003_create_school_class_table::SchoolClass,
};

static FK_CLASS_SECTION_CLASS_ID: &str = "fk_class_section_class_id";
static FK_CLASS_SECTION_CLASS_TEACHER_ID: &str = "fk_class_section_class_teacher_id";
static UQ_CLASS_SECTION_CLASS_ID_NAME: &str = "uq_class_section_class_id_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassSection::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassSection::Id))
                    .col(integer(ClassSection::ClassId))
                    .col(string(ClassSection::Name))
                    .col(integer_null(ClassSection::ClassTeacherId))
                    .col(timestamp(ClassSection::CreatedAt))
                    .col(timestamp(ClassSection::UpdatedAt))
                    .col(timestamp_null(ClassSection::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLASS_SECTION_CLASS_ID)
                    .from_tbl(ClassSection::Table)
                    .from_col(ClassSection::ClassId)
                    .to_tbl(SchoolClass::Table)
                    .to_col(SchoolClass::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLASS_SECTION_CLASS_TEACHER_ID)
                    .from_tbl(ClassSection::Table)
                    .from_col(ClassSection::ClassTeacherId)
                    .to_tbl(CampusUser::Table)
                    .to_col(CampusUser::Id)
                    .to_owned(),
            )
            .await?;

        // Partial unique index: section names are unique per class among rows that
        // have not been soft-deleted. sea-query has no builder for the WHERE clause,
        // so this stays raw SQL; the same rule is checked inside the write
        // transaction so behavior does not depend on it.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX {UQ_CLASS_SECTION_CLASS_ID_NAME} \
                 ON class_section (class_id, name) WHERE deleted_at IS NULL"
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("DROP INDEX {UQ_CLASS_SECTION_CLASS_ID_NAME}"))
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CLASS_SECTION_CLASS_TEACHER_ID)
                    .table(ClassSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CLASS_SECTION_CLASS_ID)
                    .table(ClassSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClassSection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ClassSection {
    Table,
    Id,
    ClassId,
    Name,
    ClassTeacherId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
