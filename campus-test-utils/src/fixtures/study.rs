use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use entity::study_material::MaterialType;

use crate::error::TestError;

pub struct StudyFixtures<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl StudyFixtures<'_> {
    pub async fn insert_section(
        &self,
        school_id: i32,
        class_id: i32,
        subject_id: i32,
        created_by: i32,
        is_published: bool,
    ) -> Result<entity::study_material_section::Model, TestError> {
        let now = Utc::now().naive_utc();
        let section = entity::study_material_section::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            class_id: ActiveValue::Set(class_id),
            subject_id: ActiveValue::Set(subject_id),
            title: ActiveValue::Set("Test Section".to_string()),
            is_published: ActiveValue::Set(is_published),
            sort_order: ActiveValue::Set(1),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(section.insert(self.db).await?)
    }

    pub async fn insert_material(
        &self,
        school_id: i32,
        section_id: i32,
        uploaded_by: i32,
        material_type: MaterialType,
        is_published: bool,
        sort_order: i32,
    ) -> Result<entity::study_material::Model, TestError> {
        let now = Utc::now().naive_utc();
        let hls_path = match material_type {
            MaterialType::Video => Some("hls/test/index.m3u8".to_string()),
            _ => None,
        };

        let material = entity::study_material::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            section_id: ActiveValue::Set(section_id),
            title: ActiveValue::Set("Test Material".to_string()),
            material_type: ActiveValue::Set(material_type),
            file_path: ActiveValue::Set("uploads/test.bin".to_string()),
            hls_path: ActiveValue::Set(hls_path),
            is_published: ActiveValue::Set(is_published),
            sort_order: ActiveValue::Set(sort_order),
            uploaded_by: ActiveValue::Set(uploaded_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(material.insert(self.db).await?)
    }
}
