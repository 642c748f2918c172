use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School, m20260815_000010_create_bus_table::Bus,
};

static IDX_BUS_ROUTE_BUS_ID: &str = "idx_bus_route_bus_id";
static FK_BUS_ROUTE_SCHOOL_ID: &str = "fk_bus_route_school_id";
static FK_BUS_ROUTE_BUS_ID: &str = "fk_bus_route_bus_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(BusRoute::Id))
                    .col(integer(BusRoute::SchoolId))
                    .col(integer(BusRoute::BusId))
                    .col(string(BusRoute::RouteName))
                    .col(string_len(BusRoute::RouteType, 16))
                    .col(json_binary(BusRoute::Stops))
                    .col(boolean(BusRoute::IsActive))
                    .col(timestamp(BusRoute::CreatedAt))
                    .col(timestamp(BusRoute::UpdatedAt))
                    .col(timestamp_null(BusRoute::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUS_ROUTE_BUS_ID)
                    .table(BusRoute::Table)
                    .col(BusRoute::BusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_ROUTE_SCHOOL_ID)
                    .from_tbl(BusRoute::Table)
                    .from_col(BusRoute::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUS_ROUTE_BUS_ID)
                    .from_tbl(BusRoute::Table)
                    .from_col(BusRoute::BusId)
                    .to_tbl(Bus::Table)
                    .to_col(Bus::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_ROUTE_BUS_ID)
                    .table(BusRoute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUS_ROUTE_SCHOOL_ID)
                    .table(BusRoute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUS_ROUTE_BUS_ID)
                    .table(BusRoute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BusRoute::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BusRoute {
    Table,
    Id,
    SchoolId,
    BusId,
    RouteName,
    RouteType,
    Stops,
    IsActive,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
