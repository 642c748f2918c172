use sea_orm::entity::prelude::*;

/// Top level of the study-material tree: scoped to a class, optionally narrowed to
/// a single class section (`class_section_id` null means all sections). Materials
/// underneath are only visible to consumers while `is_published` is true here too.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study_material_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub class_id: i32,
    pub class_section_id: Option<i32>,
    pub subject_id: i32,
    pub title: String,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_by: i32,
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
        belongs_to = "super::school_class::Entity",
        from = "Column::ClassId",
        to = "super::school_class::Column::Id"
    )]
    SchoolClass,
    #[sea_orm(
        belongs_to = "super::class_section::Entity",
        from = "Column::ClassSectionId",
        to = "super::class_section::Column::Id"
    )]
    ClassSection,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::campus_user::Entity",
        from = "Column::CreatedBy",
        to = "super::campus_user::Column::Id"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::study_material::Entity")]
    StudyMaterial,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::school_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolClass.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::study_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::archive::Archivable for Entity {
    fn deleted_at_column() -> Self::Column {
        Column::DeletedAt
    }
}
