use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a section of a class. Names are unique within the class
/// among non-deleted sections.
#[derive(Deserialize, ToSchema)]
pub struct CreateClassSectionDto {
    pub class_id: i32,
    pub name: String,
    pub class_teacher_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct ClassSectionDto {
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub class_teacher_id: Option<i32>,
}

impl From<entity::class_section::Model> for ClassSectionDto {
    fn from(section: entity::class_section::Model) -> Self {
        Self {
            id: section.id,
            class_id: section.class_id,
            name: section.name,
            class_teacher_id: section.class_teacher_id,
        }
    }
}
