use chrono::Utc;
use entity::prelude::Archivable;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct ClassSectionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassSectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a section of a class. Name uniqueness within the class is checked
    /// by the service inside the same transaction.
    pub async fn create(
        &self,
        class_id: i32,
        name: String,
        class_teacher_id: Option<i32>,
    ) -> Result<entity::class_section::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let section = entity::class_section::ActiveModel {
            class_id: ActiveValue::Set(class_id),
            name: ActiveValue::Set(name),
            class_teacher_id: ActiveValue::Set(class_teacher_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        section.insert(self.db).await
    }

    /// Get a non-deleted class section by ID
    pub async fn get_by_id(
        &self,
        section_id: i32,
    ) -> Result<Option<entity::class_section::Model>, DbErr> {
        entity::prelude::ClassSection::find_active()
            .filter(entity::class_section::Column::Id.eq(section_id))
            .one(self.db)
            .await
    }

    /// Find a non-deleted section of the given class with the given name
    pub async fn find_by_class_and_name(
        &self,
        class_id: i32,
        name: &str,
    ) -> Result<Option<entity::class_section::Model>, DbErr> {
        entity::prelude::ClassSection::find_active()
            .filter(entity::class_section::Column::ClassId.eq(class_id))
            .filter(entity::class_section::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Soft-delete a class section
    pub async fn soft_delete(
        &self,
        section: entity::class_section::Model,
    ) -> Result<entity::class_section::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut section: entity::class_section::ActiveModel = section.into();
        section.deleted_at = ActiveValue::Set(Some(now));
        section.updated_at = ActiveValue::Set(now);

        section.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};

    use super::ClassSectionRepository;

    /// Expect lookup by class and name to skip soft-deleted sections
    #[tokio::test]
    async fn find_by_class_and_name_ignores_deleted() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let class = test.org().insert_class(school.id, "Grade 5").await?;

        let repo = ClassSectionRepository::new(&test.db);
        let section = repo.create(class.id, "A".to_string(), None).await?;

        let found = repo.find_by_class_and_name(class.id, "A").await?;
        assert!(found.is_some());

        repo.soft_delete(section).await?;

        let found = repo.find_by_class_and_name(class.id, "A").await?;
        assert!(found.is_none());

        Ok(())
    }

    /// Expect None when the name exists only under a different class
    #[tokio::test]
    async fn find_by_class_and_name_scoped_to_class() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let class_a = test.org().insert_class(school.id, "Grade 5").await?;
        let class_b = test.org().insert_class(school.id, "Grade 6").await?;

        let repo = ClassSectionRepository::new(&test.db);
        repo.create(class_a.id, "A".to_string(), None).await?;

        let found = repo.find_by_class_and_name(class_b.id, "A").await?;
        assert!(found.is_none());

        Ok(())
    }
}
