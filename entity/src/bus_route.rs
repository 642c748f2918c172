use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RouteType {
    #[sea_orm(string_value = "MORNING")]
    Morning,
    #[sea_orm(string_value = "EVENING")]
    Evening,
    #[sea_orm(string_value = "BOTH")]
    Both,
}

/// One stop on a route. The list is caller-ordered via `order`; the store does not
/// enforce contiguity or sorting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    pub name: String,
    pub lat: Decimal,
    pub lng: Decimal,
    pub order: i32,
    pub estimated_time: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RouteStops(pub Vec<RouteStop>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub bus_id: i32,
    pub route_name: String,
    pub route_type: RouteType,
    pub stops: RouteStops,
    pub is_active: bool,
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
    #[sea_orm(has_many = "super::bus_trip::Entity")]
    BusTrip,
    #[sea_orm(has_many = "super::student_bus_assignment::Entity")]
    StudentBusAssignment,
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

impl Related<super::bus_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusTrip.def()
    }
}

impl Related<super::student_bus_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentBusAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::archive::Archivable for Entity {
    fn deleted_at_column() -> Self::Column {
        Column::DeletedAt
    }
}
