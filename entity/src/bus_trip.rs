use sea_orm::entity::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TripType {
    #[sea_orm(string_value = "MORNING")]
    Morning,
    #[sea_orm(string_value = "EVENING")]
    Evening,
    #[sea_orm(string_value = "SPECIAL")]
    Special,
}

/// Trip lifecycle. Transitions are only performed by the tracking service, which
/// rejects anything outside NotStarted → {InProgress, Cancelled} and
/// InProgress → {Completed, Cancelled}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TripStatus {
    #[sea_orm(string_value = "NOT_STARTED")]
    NotStarted,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub bus_id: i32,
    pub bus_route_id: Option<i32>,
    pub trip_type: TripType,
    pub status: TripStatus,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school::Entity",
        from = "Column::SchoolId",
        to = "super::school::Column::Id"
    )]
    School,
    #[sea_orm(
        belongs_to = "super::bus::Entity",
        from = "Column::BusId",
        to = "super::bus::Column::Id"
    )]
    Bus,
    #[sea_orm(
        belongs_to = "super::bus_route::Entity",
        from = "Column::BusRouteId",
        to = "super::bus_route::Column::Id"
    )]
    BusRoute,
    #[sea_orm(has_many = "super::bus_location::Entity")]
    BusLocation,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::bus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bus.def()
    }
}

impl Related<super::bus_route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusRoute.def()
    }
}

impl Related<super::bus_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::archive::Archivable for Entity {
    fn deleted_at_column() -> Self::Column {
        Column::DeletedAt
    }
}
