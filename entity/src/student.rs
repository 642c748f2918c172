use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub class_section_id: Option<i32>,
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
        belongs_to = "super::class_section::Entity",
        from = "Column::ClassSectionId",
        to = "super::class_section::Column::Id"
    )]
    ClassSection,
    #[sea_orm(has_many = "super::library_transaction::Entity")]
    LibraryTransaction,
    #[sea_orm(has_many = "super::student_bus_assignment::Entity")]
    StudentBusAssignment,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::class_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSection.def()
    }
}

impl Related<super::library_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryTransaction.def()
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
