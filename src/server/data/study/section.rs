use chrono::Utc;
use entity::prelude::Archivable;
use sea_orm::{
    sea_query::ExprTrait, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    QueryFilter, QueryOrder,
};

pub struct StudySectionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudySectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a study-material section, unpublished until a staff member flips it
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        school_id: i32,
        class_id: i32,
        class_section_id: Option<i32>,
        subject_id: i32,
        title: String,
        sort_order: i32,
        created_by: i32,
    ) -> Result<entity::study_material_section::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let section = entity::study_material_section::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            class_id: ActiveValue::Set(class_id),
            class_section_id: ActiveValue::Set(class_section_id),
            subject_id: ActiveValue::Set(subject_id),
            title: ActiveValue::Set(title),
            is_published: ActiveValue::Set(false),
            sort_order: ActiveValue::Set(sort_order),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        section.insert(self.db).await
    }

    /// Get a non-deleted study section by ID
    pub async fn get_by_id(
        &self,
        section_id: i32,
    ) -> Result<Option<entity::study_material_section::Model>, DbErr> {
        entity::prelude::StudyMaterialSection::find_active()
            .filter(entity::study_material_section::Column::Id.eq(section_id))
            .one(self.db)
            .await
    }

    /// List non-deleted sections for a class, optionally narrowed to one class
    /// section, ordered by sort order
    pub async fn list_by_class(
        &self,
        class_id: i32,
        class_section_id: Option<i32>,
    ) -> Result<Vec<entity::study_material_section::Model>, DbErr> {
        let mut select = entity::prelude::StudyMaterialSection::find_active()
            .filter(entity::study_material_section::Column::ClassId.eq(class_id));

        if let Some(class_section_id) = class_section_id {
            select = select.filter(
                entity::study_material_section::Column::ClassSectionId
                    .eq(class_section_id)
                    .or(entity::study_material_section::Column::ClassSectionId.is_null()),
            );
        }

        select
            .order_by_asc(entity::study_material_section::Column::SortOrder)
            .order_by_asc(entity::study_material_section::Column::Id)
            .all(self.db)
            .await
    }

    /// Flip a section's published flag
    pub async fn set_published(
        &self,
        section: entity::study_material_section::Model,
        is_published: bool,
    ) -> Result<entity::study_material_section::Model, DbErr> {
        let mut section: entity::study_material_section::ActiveModel = section.into();
        section.is_published = ActiveValue::Set(is_published);
        section.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        section.update(self.db).await
    }

    /// Soft-delete a study section
    pub async fn soft_delete(
        &self,
        section: entity::study_material_section::Model,
    ) -> Result<entity::study_material_section::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut section: entity::study_material_section::ActiveModel = section.into();
        section.deleted_at = ActiveValue::Set(Some(now));
        section.updated_at = ActiveValue::Set(now);

        section.update(self.db).await
    }
}
