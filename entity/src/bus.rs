use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub capacity: Option<i32>,
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
    #[sea_orm(has_many = "super::bus_route::Entity")]
    BusRoute,
    #[sea_orm(has_many = "super::bus_trip::Entity")]
    BusTrip,
    #[sea_orm(has_many = "super::bus_location::Entity")]
    BusLocation,
    #[sea_orm(has_many = "super::student_bus_assignment::Entity")]
    StudentBusAssignment,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::bus_route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusRoute.def()
    }
}

impl Related<super::bus_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusTrip.def()
    }
}

impl Related<super::bus_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusLocation.def()
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
