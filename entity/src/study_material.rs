use sea_orm::entity::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum MaterialType {
    #[sea_orm(string_value = "VIDEO")]
    Video,
    #[sea_orm(string_value = "PDF")]
    Pdf,
    #[sea_orm(string_value = "PPT")]
    Ppt,
}

/// A published file under a study-material section. `hls_path` carries the
/// transcoded stream location and is present exactly when `material_type` is
/// Video; the publishing service enforces that at creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study_material")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub section_id: i32,
    pub title: String,
    pub material_type: MaterialType,
    pub file_path: String,
    pub hls_path: Option<String>,
    pub file_size: Option<i64>,
    /// Seconds, videos only.
    pub duration: Option<i32>,
    pub is_published: bool,
    pub sort_order: i32,
    pub uploaded_by: i32,
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
        belongs_to = "super::study_material_section::Entity",
        from = "Column::SectionId",
        to = "super::study_material_section::Column::Id"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::campus_user::Entity",
        from = "Column::UploadedBy",
        to = "super::campus_user::Column::Id"
    )]
    UploadedBy,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::study_material_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::campus_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UploadedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::archive::Archivable for Entity {
    fn deleted_at_column() -> Self::Column {
        Column::DeletedAt
    }
}
