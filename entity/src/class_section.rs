use sea_orm::entity::prelude::*;

/// A named section of a class ("A", "B"). `(class_id, name)` must be unique among
/// non-deleted rows; the check lives in the write transaction, with a matching
/// partial unique index in the Postgres schema.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub class_teacher_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_class::Entity",
        from = "Column::ClassId",
        to = "super::school_class::Column::Id"
    )]
    SchoolClass,
    #[sea_orm(
        belongs_to = "super::campus_user::Entity",
        from = "Column::ClassTeacherId",
        to = "super::campus_user::Column::Id"
    )]
    ClassTeacher,
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::school_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolClass.def()
    }
}

impl Related<super::campus_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTeacher.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::archive::Archivable for Entity {
    fn deleted_at_column() -> Self::Column {
        Column::DeletedAt
    }
}
