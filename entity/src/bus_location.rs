use sea_orm::entity::prelude::*;

/// One GPS report from a bus. Append-only: rows are never updated or soft-deleted,
/// so a location stays queryable even after its trip is archived. Indexed by
/// `(bus_id, recorded_at)` for time-range replay and by `bus_trip_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bus_id: i32,
    pub bus_trip_id: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((10, 8)))")]
    pub latitude: Decimal,
    #[sea_orm(column_type = "Decimal(Some((11, 8)))")]
    pub longitude: Decimal,
    /// km/h
    pub speed: Option<f64>,
    /// Degrees clockwise from north, 0..=360.
    pub heading: Option<f64>,
    /// Reported GPS accuracy in meters.
    pub accuracy: Option<f64>,
    pub recorded_at: DateTime,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bus::Entity",
        from = "Column::BusId",
        to = "super::bus::Column::Id"
    )]
    Bus,
    #[sea_orm(
        belongs_to = "super::bus_trip::Entity",
        from = "Column::BusTripId",
        to = "super::bus_trip::Column::Id"
    )]
    BusTrip,
}

impl Related<super::bus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bus.def()
    }
}

impl Related<super::bus_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusTrip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
