use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School, m20260815_000005_create_student_table::Student,
    m20260815_000010_create_bus_table::Bus, m20260815_000011_create_bus_route_table::BusRoute,
};

static FK_STUDENT_BUS_ASSIGNMENT_SCHOOL_ID: &str = "fk_student_bus_assignment_school_id";
static FK_STUDENT_BUS_ASSIGNMENT_STUDENT_ID: &str = "fk_student_bus_assignment_student_id";
static FK_STUDENT_BUS_ASSIGNMENT_BUS_ID: &str = "fk_student_bus_assignment_bus_id";
static FK_STUDENT_BUS_ASSIGNMENT_BUS_ROUTE_ID: &str = "fk_student_bus_assignment_bus_route_id";
static UQ_STUDENT_BUS_ASSIGNMENT_ACTIVE_STUDENT: &str = "uq_student_bus_assignment_active_student";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentBusAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentBusAssignment::Id))
                    .col(integer(StudentBusAssignment::SchoolId))
                    .col(integer(StudentBusAssignment::StudentId))
                    .col(integer(StudentBusAssignment::BusId))
                    .col(integer_null(StudentBusAssignment::BusRouteId))
                    .col(string_null(StudentBusAssignment::StopName))
                    .col(time_null(StudentBusAssignment::PickupTime))
                    .col(time_null(StudentBusAssignment::DropoffTime))
                    .col(boolean(StudentBusAssignment::IsActive))
                    .col(timestamp(StudentBusAssignment::CreatedAt))
                    .col(timestamp(StudentBusAssignment::UpdatedAt))
                    .col(timestamp_null(StudentBusAssignment::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_SCHOOL_ID)
                    .from_tbl(StudentBusAssignment::Table)
                    .from_col(StudentBusAssignment::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_STUDENT_ID)
                    .from_tbl(StudentBusAssignment::Table)
                    .from_col(StudentBusAssignment::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_BUS_ID)
                    .from_tbl(StudentBusAssignment::Table)
                    .from_col(StudentBusAssignment::BusId)
                    .to_tbl(Bus::Table)
                    .to_col(Bus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_BUS_ROUTE_ID)
                    .from_tbl(StudentBusAssignment::Table)
                    .from_col(StudentBusAssignment::BusRouteId)
                    .to_tbl(BusRoute::Table)
                    .to_col(BusRoute::Id)
                    .to_owned(),
            )
            .await?;

        // At most one active, non-deleted assignment per student. The tracking
        // service re-checks this inside its write transaction; the index is the
        // store-level backstop against concurrent writers.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX {UQ_STUDENT_BUS_ASSIGNMENT_ACTIVE_STUDENT} \
                 ON student_bus_assignment (student_id) \
                 WHERE is_active AND deleted_at IS NULL"
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "DROP INDEX {UQ_STUDENT_BUS_ASSIGNMENT_ACTIVE_STUDENT}"
            ))
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_BUS_ROUTE_ID)
                    .table(StudentBusAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_BUS_ID)
                    .table(StudentBusAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_STUDENT_ID)
                    .table(StudentBusAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_BUS_ASSIGNMENT_SCHOOL_ID)
                    .table(StudentBusAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(StudentBusAssignment::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudentBusAssignment {
    Table,
    Id,
    SchoolId,
    StudentId,
    BusId,
    BusRouteId,
    StopName,
    PickupTime,
    DropoffTime,
    IsActive,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
