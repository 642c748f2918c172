use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000010_create_bus_table::Bus, m20260815_000012_create_bus_trip_table::BusTrip,
};

static IDX_BUS_LOCATION_BUS_ID_RECORDED_AT: &str = "idx_bus_location_bus_id_recorded_at";
static IDX_BUS_LOCATION_BUS_TRIP_ID: &str = "idx_bus_location_bus_trip_id";
static FK_BUS_LOCATION_BUS_ID: &str = "fk_bus_location_bus_id";
static FK_BUS_LOCATION_BUS_TRIP_ID: &str = "fk_bus_location_bus_trip_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only position log: no updated_at, no deleted_at. Samples outlive
        // their trip so route history stays queryable after the trip is archived.
        manager
            .create_table(
                Table::create()
                    .table(BusLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(BusLocation::Id))
                    .col(integer(BusLocation::BusId))
                    .col(integer_null(BusLocation::BusTripId))
                    .col(decimal_len(BusLocation::Latitude, 10, 8))
                    .col(decimal_len(BusLocation::Longitude, 11, 8))
                    .col(double_null(BusLocation::Speed))
                    .col(double_null(BusLocation::Heading))
                    .col(double_null(BusLocation::Accuracy))
                    .col(timestamp(BusLocation::RecordedAt))
                    .col(timestamp(BusLocation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUS_LOCATION_BUS_ID_RECORDED_AT)
                    .table(BusLocation::Table)
                    .col(BusLocation::BusId)
                    .col(BusLocation::RecordedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUS_LOCATION_BUS_TRIP_ID)
                    .table(BusLocation::Table)
                    .col(BusLocation::BusTripId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_LOCATION_BUS_ID)
                    .from_tbl(BusLocation::Table)
                    .from_col(BusLocation::BusId)
                    .to_tbl(Bus::Table)
                    .to_col(Bus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_LOCATION_BUS_TRIP_ID)
                    .from_tbl(BusLocation::Table)
                    .from_col(BusLocation::BusTripId)
                    .to_tbl(BusTrip::Table)
                    .to_col(BusTrip::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_LOCATION_BUS_TRIP_ID)
                    .table(BusLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_LOCATION_BUS_ID)
                    .table(BusLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUS_LOCATION_BUS_TRIP_ID)
                    .table(BusLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUS_LOCATION_BUS_ID_RECORDED_AT)
                    .table(BusLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BusLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BusLocation {
    Table,
    Id,
    BusId,
    BusTripId,
    Latitude,
    Longitude,
    Speed,
    Heading,
    Accuracy,
    RecordedAt,
    CreatedAt,
}
