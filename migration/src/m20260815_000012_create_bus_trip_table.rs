use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School, m20260815_000010_create_bus_table::Bus,
    m20260815_000011_create_bus_route_table::BusRoute,
};

static IDX_BUS_TRIP_BUS_ID: &str = "idx_bus_trip_bus_id";
static FK_BUS_TRIP_SCHOOL_ID: &str = "fk_bus_trip_school_id";
static FK_BUS_TRIP_BUS_ID: &str = "fk_bus_trip_bus_id";
static FK_BUS_TRIP_BUS_ROUTE_ID: &str = "fk_bus_trip_bus_route_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusTrip::Table)
                    .if_not_exists()
                    .col(pk_auto(BusTrip::Id))
                    .col(integer(BusTrip::SchoolId))
                    .col(integer(BusTrip::BusId))
                    .col(integer_null(BusTrip::BusRouteId))
                    .col(string_len(BusTrip::TripType, 16))
                    .col(string_len(BusTrip::Status, 16))
                    .col(timestamp_null(BusTrip::StartTime))
                    .col(timestamp_null(BusTrip::EndTime))
                    .col(timestamp(BusTrip::CreatedAt))
                    .col(timestamp(BusTrip::UpdatedAt))
                    .col(timestamp_null(BusTrip::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUS_TRIP_BUS_ID)
                    .table(BusTrip::Table)
                    .col(BusTrip::BusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_TRIP_SCHOOL_ID)
                    .from_tbl(BusTrip::Table)
                    .from_col(BusTrip::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_TRIP_BUS_ID)
                    .from_tbl(BusTrip::Table)
                    .from_col(BusTrip::BusId)
                    .to_tbl(Bus::Table)
                    .to_col(Bus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_TRIP_BUS_ROUTE_ID)
                    .from_tbl(BusTrip::Table)
                    .from_col(BusTrip::BusRouteId)
                    .to_tbl(BusRoute::Table)
                    .to_col(BusRoute::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_TRIP_BUS_ROUTE_ID)
                    .table(BusTrip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_TRIP_BUS_ID)
                    .table(BusTrip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_TRIP_SCHOOL_ID)
                    .table(BusTrip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUS_TRIP_BUS_ID)
                    .table(BusTrip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BusTrip::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BusTrip {
    Table,
    Id,
    SchoolId,
    BusId,
    BusRouteId,
    TripType,
    Status,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
