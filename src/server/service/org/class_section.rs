use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::org::{class_section::ClassSectionRepository, school_class::SchoolClassRepository},
    error::Error,
};

pub struct ClassSectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassSectionService<'a> {
    /// Creates a new instance of [`ClassSectionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a section of a class.
    ///
    /// Section names are unique within their class among non-deleted sections;
    /// the check and the insert share a transaction, and the Postgres schema
    /// backs the rule with a partial unique index.
    pub async fn create(
        &self,
        class_id: i32,
        name: String,
        class_teacher_id: Option<i32>,
    ) -> Result<entity::class_section::Model, Error> {
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "Section name must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let class_repo = SchoolClassRepository::new(&txn);
        let section_repo = ClassSectionRepository::new(&txn);

        class_repo
            .get_by_id(class_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Class",
                id: class_id,
            })?;

        if section_repo
            .find_by_class_and_name(class_id, &name)
            .await?
            .is_some()
        {
            return Err(Error::Validation(format!(
                "Section '{}' already exists in this class",
                name
            )));
        }

        let section = section_repo.create(class_id, name, class_teacher_id).await?;

        txn.commit().await?;

        Ok(section)
    }

    /// Soft-delete a class section, freeing its name for reuse
    pub async fn delete(&self, section_id: i32) -> Result<(), Error> {
        let section_repo = ClassSectionRepository::new(self.db);

        let section = section_repo
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Class section",
                id: section_id,
            })?;

        section_repo.soft_delete(section).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};

    use super::*;

    mod create {
        use super::*;

        /// Expect Validation when the name is already used in the class
        #[tokio::test]
        async fn rejects_duplicate_name_in_class() -> Result<(), TestError> {
            let test = TestBuilder::new().with_org_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let class = test.org().insert_class(school.id, "Grade 5").await?;

            let service = ClassSectionService::new(&test.db);
            service.create(class.id, "A".to_string(), None).await.unwrap();

            let result = service.create(class.id, "A".to_string(), None).await;
            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }

        /// Expect the same name to be fine under a different class
        #[tokio::test]
        async fn allows_same_name_in_other_class() -> Result<(), TestError> {
            let test = TestBuilder::new().with_org_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let class_a = test.org().insert_class(school.id, "Grade 5").await?;
            let class_b = test.org().insert_class(school.id, "Grade 6").await?;

            let service = ClassSectionService::new(&test.db);
            service
                .create(class_a.id, "A".to_string(), None)
                .await
                .unwrap();

            let result = service.create(class_b.id, "A".to_string(), None).await;
            assert!(result.is_ok());

            Ok(())
        }

        /// Expect a deleted section's name to be reusable
        #[tokio::test]
        async fn allows_reusing_deleted_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_org_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let class = test.org().insert_class(school.id, "Grade 5").await?;

            let service = ClassSectionService::new(&test.db);
            let section = service
                .create(class.id, "A".to_string(), None)
                .await
                .unwrap();
            service.delete(section.id).await.unwrap();

            let result = service.create(class.id, "A".to_string(), None).await;
            assert!(result.is_ok());

            Ok(())
        }
    }
}
