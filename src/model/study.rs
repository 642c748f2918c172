use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialTypeDto {
    Video,
    Pdf,
    Ppt,
}

impl From<MaterialTypeDto> for entity::study_material::MaterialType {
    fn from(material_type: MaterialTypeDto) -> Self {
        match material_type {
            MaterialTypeDto::Video => Self::Video,
            MaterialTypeDto::Pdf => Self::Pdf,
            MaterialTypeDto::Ppt => Self::Ppt,
        }
    }
}

impl From<entity::study_material::MaterialType> for MaterialTypeDto {
    fn from(material_type: entity::study_material::MaterialType) -> Self {
        match material_type {
            entity::study_material::MaterialType::Video => Self::Video,
            entity::study_material::MaterialType::Pdf => Self::Pdf,
            entity::study_material::MaterialType::Ppt => Self::Ppt,
        }
    }
}

/// Request to create a study material section under a class.
///
/// `class_section_id` of `None` publishes to every section of the class.
/// `created_by` identifies the authoring staff user; authentication itself is
/// handled upstream of this API.
#[derive(Deserialize, ToSchema)]
pub struct CreateStudySectionDto {
    pub class_id: i32,
    pub class_section_id: Option<i32>,
    pub subject_id: i32,
    pub title: String,
    pub sort_order: Option<i32>,
    pub created_by: i32,
}

#[derive(Serialize, ToSchema)]
pub struct StudySectionDto {
    pub id: i32,
    pub class_id: i32,
    pub class_section_id: Option<i32>,
    pub subject_id: i32,
    pub title: String,
    pub is_published: bool,
    pub sort_order: i32,
}

impl From<entity::study_material_section::Model> for StudySectionDto {
    fn from(section: entity::study_material_section::Model) -> Self {
        Self {
            id: section.id,
            class_id: section.class_id,
            class_section_id: section.class_section_id,
            subject_id: section.subject_id,
            title: section.title,
            is_published: section.is_published,
            sort_order: section.sort_order,
        }
    }
}

/// Request to attach a material to a section. `hls_path` is required for videos
/// and rejected for anything else.
#[derive(Deserialize, ToSchema)]
pub struct CreateMaterialDto {
    pub section_id: i32,
    pub title: String,
    pub material_type: MaterialTypeDto,
    pub file_path: String,
    pub hls_path: Option<String>,
    pub file_size: Option<i64>,
    pub duration: Option<i32>,
    pub sort_order: Option<i32>,
    pub uploaded_by: i32,
}

#[derive(Serialize, ToSchema)]
pub struct MaterialDto {
    pub id: i32,
    pub section_id: i32,
    pub title: String,
    pub material_type: MaterialTypeDto,
    pub file_path: String,
    pub hls_path: Option<String>,
    pub file_size: Option<i64>,
    pub duration: Option<i32>,
    pub is_published: bool,
    pub sort_order: i32,
}

impl From<entity::study_material::Model> for MaterialDto {
    fn from(material: entity::study_material::Model) -> Self {
        Self {
            id: material.id,
            section_id: material.section_id,
            title: material.title,
            material_type: material.material_type.into(),
            file_path: material.file_path,
            hls_path: material.hls_path,
            file_size: material.file_size,
            duration: material.duration,
            is_published: material.is_published,
            sort_order: material.sort_order,
        }
    }
}

/// Publish/unpublish toggle shared by sections and materials.
#[derive(Deserialize, ToSchema)]
pub struct PublishDto {
    pub is_published: bool,
}

/// Manual sort key update. Keys are caller-maintained with no compaction.
#[derive(Deserialize, ToSchema)]
pub struct ReorderDto {
    pub sort_order: i32,
}
