use chrono::Utc;
use entity::prelude::Archivable;
use entity::study_material::MaterialType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder,
};

pub struct MaterialRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaterialRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a material under a section, unpublished until flipped
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        school_id: i32,
        section_id: i32,
        title: String,
        material_type: MaterialType,
        file_path: String,
        hls_path: Option<String>,
        file_size: Option<i64>,
        duration: Option<i32>,
        sort_order: i32,
        uploaded_by: i32,
    ) -> Result<entity::study_material::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let material = entity::study_material::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            section_id: ActiveValue::Set(section_id),
            title: ActiveValue::Set(title),
            material_type: ActiveValue::Set(material_type),
            file_path: ActiveValue::Set(file_path),
            hls_path: ActiveValue::Set(hls_path),
            file_size: ActiveValue::Set(file_size),
            duration: ActiveValue::Set(duration),
            is_published: ActiveValue::Set(false),
            sort_order: ActiveValue::Set(sort_order),
            uploaded_by: ActiveValue::Set(uploaded_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        material.insert(self.db).await
    }

    /// Get a non-deleted material by ID
    pub async fn get_by_id(
        &self,
        material_id: i32,
    ) -> Result<Option<entity::study_material::Model>, DbErr> {
        entity::prelude::StudyMaterial::find_active()
            .filter(entity::study_material::Column::Id.eq(material_id))
            .one(self.db)
            .await
    }

    /// List every non-deleted material under a section, ordered by sort order
    pub async fn list_by_section(
        &self,
        section_id: i32,
    ) -> Result<Vec<entity::study_material::Model>, DbErr> {
        entity::prelude::StudyMaterial::find_active()
            .filter(entity::study_material::Column::SectionId.eq(section_id))
            .order_by_asc(entity::study_material::Column::SortOrder)
            .order_by_asc(entity::study_material::Column::Id)
            .all(self.db)
            .await
    }

    /// List only the published materials under a section, ordered by sort order
    pub async fn list_published_by_section(
        &self,
        section_id: i32,
    ) -> Result<Vec<entity::study_material::Model>, DbErr> {
        entity::prelude::StudyMaterial::find_active()
            .filter(entity::study_material::Column::SectionId.eq(section_id))
            .filter(entity::study_material::Column::IsPublished.eq(true))
            .order_by_asc(entity::study_material::Column::SortOrder)
            .order_by_asc(entity::study_material::Column::Id)
            .all(self.db)
            .await
    }

    /// Flip a material's published flag
    pub async fn set_published(
        &self,
        material: entity::study_material::Model,
        is_published: bool,
    ) -> Result<entity::study_material::Model, DbErr> {
        let mut material: entity::study_material::ActiveModel = material.into();
        material.is_published = ActiveValue::Set(is_published);
        material.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        material.update(self.db).await
    }

    /// Move a material to a new slot within its section
    pub async fn update_sort_order(
        &self,
        material: entity::study_material::Model,
        sort_order: i32,
    ) -> Result<entity::study_material::Model, DbErr> {
        let mut material: entity::study_material::ActiveModel = material.into();
        material.sort_order = ActiveValue::Set(sort_order);
        material.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        material.update(self.db).await
    }

    /// Soft-delete a material
    pub async fn soft_delete(
        &self,
        material: entity::study_material::Model,
    ) -> Result<entity::study_material::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut material: entity::study_material::ActiveModel = material.into();
        material.deleted_at = ActiveValue::Set(Some(now));
        material.updated_at = ActiveValue::Set(now);

        material.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};
    use entity::study_material::MaterialType;

    use super::MaterialRepository;

    /// Expect the published listing to skip drafts and respect sort order
    #[tokio::test]
    async fn published_listing_ordered_and_filtered() -> Result<(), TestError> {
        let test = TestBuilder::new().with_study_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let class = test.org().insert_class(school.id, "Grade 5").await?;
        let subject = test.org().insert_subject(school.id, "Science").await?;
        let staff = test.org().insert_user(school.id, "staff@northside.test").await?;
        let section = test
            .study()
            .insert_section(school.id, class.id, subject.id, staff.id, true)
            .await?;

        let second = test
            .study()
            .insert_material(school.id, section.id, staff.id, MaterialType::Pdf, true, 2)
            .await?;
        let first = test
            .study()
            .insert_material(school.id, section.id, staff.id, MaterialType::Video, true, 1)
            .await?;
        test.study()
            .insert_material(school.id, section.id, staff.id, MaterialType::Ppt, false, 3)
            .await?;

        let repo = MaterialRepository::new(&test.db);
        let published = repo.list_published_by_section(section.id).await?;

        assert_eq!(published.len(), 2);
        assert_eq!(published[0].id, first.id);
        assert_eq!(published[1].id, second.id);

        Ok(())
    }
}
