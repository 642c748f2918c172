use entity::study_material::MaterialType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        org::{
            class_section::ClassSectionRepository, school_class::SchoolClassRepository,
            subject::SubjectRepository,
        },
        study::{material::MaterialRepository, section::StudySectionRepository},
    },
    error::Error,
};

/// Fields needed to create a material under a section.
#[derive(Clone, Debug)]
pub struct NewMaterial {
    pub title: String,
    pub material_type: MaterialType,
    pub file_path: String,
    pub hls_path: Option<String>,
    pub file_size: Option<i64>,
    pub duration: Option<i32>,
    pub sort_order: i32,
    pub uploaded_by: i32,
}

pub struct PublishingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublishingService<'a> {
    /// Creates a new instance of [`PublishingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a study-material section for a class and subject.
    ///
    /// When a class section is named it must belong to the given class. New
    /// sections start unpublished.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_section(
        &self,
        class_id: i32,
        class_section_id: Option<i32>,
        subject_id: i32,
        title: String,
        sort_order: i32,
        created_by: i32,
    ) -> Result<entity::study_material_section::Model, Error> {
        if title.trim().is_empty() {
            return Err(Error::Validation("Title must not be empty".to_string()));
        }

        let txn = self.db.begin().await?;

        let class_repo = SchoolClassRepository::new(&txn);
        let subject_repo = SubjectRepository::new(&txn);
        let class_section_repo = ClassSectionRepository::new(&txn);
        let section_repo = StudySectionRepository::new(&txn);

        let class = class_repo
            .get_by_id(class_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Class",
                id: class_id,
            })?;

        subject_repo
            .get_by_id(subject_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Subject",
                id: subject_id,
            })?;

        if let Some(id) = class_section_id {
            let class_section =
                class_section_repo
                    .get_by_id(id)
                    .await?
                    .ok_or(Error::NotFound {
                        entity: "Class section",
                        id,
                    })?;

            if class_section.class_id != class_id {
                return Err(Error::Validation(
                    "Class section does not belong to this class".to_string(),
                ));
            }
        }

        let section = section_repo
            .create(
                class.school_id,
                class_id,
                class_section_id,
                subject_id,
                title,
                sort_order,
                created_by,
            )
            .await?;

        txn.commit().await?;

        Ok(section)
    }

    /// Create a material under a section.
    ///
    /// A video must carry an HLS path and nothing else may; the stream location
    /// is written by the transcoder before the material is registered here.
    pub async fn create_material(
        &self,
        section_id: i32,
        material: NewMaterial,
    ) -> Result<entity::study_material::Model, Error> {
        if material.title.trim().is_empty() {
            return Err(Error::Validation("Title must not be empty".to_string()));
        }

        match (material.material_type, &material.hls_path) {
            (MaterialType::Video, None) => {
                return Err(Error::Validation(
                    "Video materials require an HLS path".to_string(),
                ));
            }
            (MaterialType::Pdf | MaterialType::Ppt, Some(_)) => {
                return Err(Error::Validation(
                    "Only video materials may carry an HLS path".to_string(),
                ));
            }
            _ => {}
        }

        if material.material_type != MaterialType::Video && material.duration.is_some() {
            return Err(Error::Validation(
                "Only video materials may carry a duration".to_string(),
            ));
        }

        let section_repo = StudySectionRepository::new(self.db);
        let material_repo = MaterialRepository::new(self.db);

        let section = section_repo
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Study section",
                id: section_id,
            })?;

        let material = material_repo
            .create(
                section.school_id,
                section_id,
                material.title,
                material.material_type,
                material.file_path,
                material.hls_path,
                material.file_size,
                material.duration,
                material.sort_order,
                material.uploaded_by,
            )
            .await?;

        Ok(material)
    }

    /// Publish or unpublish a section
    pub async fn set_section_published(
        &self,
        section_id: i32,
        is_published: bool,
    ) -> Result<entity::study_material_section::Model, Error> {
        let section_repo = StudySectionRepository::new(self.db);

        let section = section_repo
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Study section",
                id: section_id,
            })?;

        Ok(section_repo.set_published(section, is_published).await?)
    }

    /// Publish or unpublish a material
    pub async fn set_material_published(
        &self,
        material_id: i32,
        is_published: bool,
    ) -> Result<entity::study_material::Model, Error> {
        let material_repo = MaterialRepository::new(self.db);

        let material = material_repo
            .get_by_id(material_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Material",
                id: material_id,
            })?;

        Ok(material_repo.set_published(material, is_published).await?)
    }

    /// Materials a student can see under a section.
    ///
    /// Visibility requires both flags: an unpublished section yields an empty
    /// list no matter what its materials say.
    pub async fn visible_materials(
        &self,
        section_id: i32,
    ) -> Result<Vec<entity::study_material::Model>, Error> {
        let section_repo = StudySectionRepository::new(self.db);
        let material_repo = MaterialRepository::new(self.db);

        let section = section_repo
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Study section",
                id: section_id,
            })?;

        if !section.is_published {
            return Ok(Vec::new());
        }

        Ok(material_repo.list_published_by_section(section_id).await?)
    }

    /// Every material under a section regardless of publish state, for staff
    pub async fn list_materials(
        &self,
        section_id: i32,
    ) -> Result<Vec<entity::study_material::Model>, Error> {
        let section_repo = StudySectionRepository::new(self.db);
        let material_repo = MaterialRepository::new(self.db);

        section_repo
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Study section",
                id: section_id,
            })?;

        Ok(material_repo.list_by_section(section_id).await?)
    }

    /// Sections of a class, optionally narrowed to one class section
    pub async fn list_sections(
        &self,
        class_id: i32,
        class_section_id: Option<i32>,
    ) -> Result<Vec<entity::study_material_section::Model>, Error> {
        let section_repo = StudySectionRepository::new(self.db);

        Ok(section_repo.list_by_class(class_id, class_section_id).await?)
    }

    /// Move a material to a new slot within its section
    pub async fn reorder_material(
        &self,
        material_id: i32,
        sort_order: i32,
    ) -> Result<entity::study_material::Model, Error> {
        if sort_order < 0 {
            return Err(Error::Validation(
                "Sort order must not be negative".to_string(),
            ));
        }

        let material_repo = MaterialRepository::new(self.db);

        let material = material_repo
            .get_by_id(material_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Material",
                id: material_id,
            })?;

        Ok(material_repo.update_sort_order(material, sort_order).await?)
    }

    /// Soft-delete a section together with every material underneath it
    pub async fn delete_section(&self, section_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let section_repo = StudySectionRepository::new(&txn);
        let material_repo = MaterialRepository::new(&txn);

        let section = section_repo
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Study section",
                id: section_id,
            })?;

        for material in material_repo.list_by_section(section_id).await? {
            material_repo.soft_delete(material).await?;
        }

        section_repo.soft_delete(section).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Soft-delete a single material
    pub async fn delete_material(&self, material_id: i32) -> Result<(), Error> {
        let material_repo = MaterialRepository::new(self.db);

        let material = material_repo
            .get_by_id(material_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Material",
                id: material_id,
            })?;

        material_repo.soft_delete(material).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestContext, TestError};

    use super::*;

    struct Ids {
        school: i32,
        class: i32,
        subject: i32,
        staff: i32,
    }

    async fn seed(test: &TestContext) -> Result<Ids, TestError> {
        let school = test.org().insert_school("Northside").await?;
        let class = test.org().insert_class(school.id, "Grade 5").await?;
        let subject = test.org().insert_subject(school.id, "Science").await?;
        let staff = test.org().insert_user(school.id, "staff@northside.test").await?;

        Ok(Ids {
            school: school.id,
            class: class.id,
            subject: subject.id,
            staff: staff.id,
        })
    }

    fn pdf_material(uploaded_by: i32) -> NewMaterial {
        NewMaterial {
            title: "Chapter 1".to_string(),
            material_type: MaterialType::Pdf,
            file_path: "uploads/ch1.pdf".to_string(),
            hls_path: None,
            file_size: Some(1024),
            duration: None,
            sort_order: 1,
            uploaded_by,
        }
    }

    mod create_material {
        use super::*;

        /// Expect Validation when a video is missing its HLS path
        #[tokio::test]
        async fn rejects_video_without_hls_path() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, true)
                .await?;

            let service = PublishingService::new(&test.db);
            let mut video = pdf_material(ids.staff);
            video.material_type = MaterialType::Video;

            let result = service.create_material(section.id, video).await;
            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }

        /// Expect Validation when a PDF carries an HLS path
        #[tokio::test]
        async fn rejects_pdf_with_hls_path() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, true)
                .await?;

            let service = PublishingService::new(&test.db);
            let mut pdf = pdf_material(ids.staff);
            pdf.hls_path = Some("hls/ch1/index.m3u8".to_string());

            let result = service.create_material(section.id, pdf).await;
            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }

        /// Expect a new material to start unpublished
        #[tokio::test]
        async fn new_material_starts_unpublished() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, true)
                .await?;

            let service = PublishingService::new(&test.db);
            let material = service
                .create_material(section.id, pdf_material(ids.staff))
                .await
                .unwrap();

            assert!(!material.is_published);

            Ok(())
        }
    }

    mod visible_materials {
        use super::*;

        /// Expect an unpublished section to hide even published materials
        #[tokio::test]
        async fn unpublished_section_hides_everything() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, false)
                .await?;
            test.study()
                .insert_material(ids.school, section.id, ids.staff, MaterialType::Pdf, true, 1)
                .await?;

            let service = PublishingService::new(&test.db);
            let visible = service.visible_materials(section.id).await.unwrap();

            assert!(visible.is_empty());

            Ok(())
        }

        /// Expect publishing the section to reveal its published materials
        #[tokio::test]
        async fn publishing_section_reveals_materials() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, false)
                .await?;
            test.study()
                .insert_material(ids.school, section.id, ids.staff, MaterialType::Pdf, true, 1)
                .await?;
            test.study()
                .insert_material(ids.school, section.id, ids.staff, MaterialType::Ppt, false, 2)
                .await?;

            let service = PublishingService::new(&test.db);
            service.set_section_published(section.id, true).await.unwrap();

            let visible = service.visible_materials(section.id).await.unwrap();
            assert_eq!(visible.len(), 1);

            Ok(())
        }
    }

    mod create_section {
        use super::*;

        /// Expect Validation when the class section belongs to another class
        #[tokio::test]
        async fn rejects_foreign_class_section() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let other_class = test.org().insert_class(ids.school, "Grade 6").await?;
            let other_section = test.org().insert_class_section(other_class.id, "A").await?;

            let service = PublishingService::new(&test.db);
            let result = service
                .create_section(
                    ids.class,
                    Some(other_section.id),
                    ids.subject,
                    "Unit 1".to_string(),
                    1,
                    ids.staff,
                )
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }

        /// Expect a new section to start unpublished
        #[tokio::test]
        async fn new_section_starts_unpublished() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;

            let service = PublishingService::new(&test.db);
            let section = service
                .create_section(
                    ids.class,
                    None,
                    ids.subject,
                    "Unit 1".to_string(),
                    1,
                    ids.staff,
                )
                .await
                .unwrap();

            assert!(!section.is_published);

            Ok(())
        }
    }

    mod list_sections {
        use super::*;

        /// Expect filtering by class section to return its sections plus
        /// class-wide ones, and skip sections scoped to a sibling
        #[tokio::test]
        async fn class_section_filter_includes_class_wide() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section_a = test.org().insert_class_section(ids.class, "A").await?;
            let section_b = test.org().insert_class_section(ids.class, "B").await?;

            let service = PublishingService::new(&test.db);
            let class_wide = service
                .create_section(ids.class, None, ids.subject, "Unit 1".to_string(), 1, ids.staff)
                .await
                .unwrap();
            let scoped_a = service
                .create_section(
                    ids.class,
                    Some(section_a.id),
                    ids.subject,
                    "Unit 2".to_string(),
                    2,
                    ids.staff,
                )
                .await
                .unwrap();
            service
                .create_section(
                    ids.class,
                    Some(section_b.id),
                    ids.subject,
                    "Unit 3".to_string(),
                    3,
                    ids.staff,
                )
                .await
                .unwrap();

            let listed = service
                .list_sections(ids.class, Some(section_a.id))
                .await
                .unwrap();

            let listed_ids: Vec<i32> = listed.iter().map(|s| s.id).collect();
            assert_eq!(listed_ids, vec![class_wide.id, scoped_a.id]);

            Ok(())
        }
    }

    mod delete_section {
        use super::*;

        /// Expect deleting a section to take its materials with it
        #[tokio::test]
        async fn cascades_to_materials() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, true)
                .await?;
            let material = test
                .study()
                .insert_material(ids.school, section.id, ids.staff, MaterialType::Pdf, true, 1)
                .await?;

            let service = PublishingService::new(&test.db);
            service.delete_section(section.id).await.unwrap();

            let found = MaterialRepository::new(&test.db)
                .get_by_id(material.id)
                .await?;
            assert!(found.is_none());

            let result = service.visible_materials(section.id).await;
            assert!(matches!(result, Err(Error::NotFound { .. })));

            Ok(())
        }
    }

    mod reorder_material {
        use super::*;

        /// Expect reorder to move the material and keep listings sorted
        #[tokio::test]
        async fn moves_material() -> Result<(), TestError> {
            let test = TestBuilder::new().with_study_tables().build().await?;
            let ids = seed(&test).await?;
            let section = test
                .study()
                .insert_section(ids.school, ids.class, ids.subject, ids.staff, true)
                .await?;
            let first = test
                .study()
                .insert_material(ids.school, section.id, ids.staff, MaterialType::Pdf, true, 1)
                .await?;
            let second = test
                .study()
                .insert_material(ids.school, section.id, ids.staff, MaterialType::Ppt, true, 2)
                .await?;

            let service = PublishingService::new(&test.db);
            service.reorder_material(first.id, 3).await.unwrap();

            let listed = service.list_materials(section.id).await.unwrap();
            assert_eq!(listed[0].id, second.id);
            assert_eq!(listed[1].id, first.id);

            Ok(())
        }
    }
}
