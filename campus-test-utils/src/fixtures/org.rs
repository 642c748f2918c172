use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct OrgFixtures<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl OrgFixtures<'_> {
    pub async fn insert_school(&self, name: &str) -> Result<entity::school::Model, TestError> {
        let now = Utc::now().naive_utc();
        let school = entity::school::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(school.insert(self.db).await?)
    }

    pub async fn insert_user(
        &self,
        school_id: i32,
        email: &str,
    ) -> Result<entity::campus_user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let user = entity::campus_user::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            display_name: ActiveValue::Set("Test Staff".to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn insert_student(&self, school_id: i32) -> Result<entity::student::Model, TestError> {
        let now = Utc::now().naive_utc();
        let student = entity::student::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("Student".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(student.insert(self.db).await?)
    }

    pub async fn insert_class(
        &self,
        school_id: i32,
        name: &str,
    ) -> Result<entity::school_class::Model, TestError> {
        let now = Utc::now().naive_utc();
        let class = entity::school_class::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(class.insert(self.db).await?)
    }

    pub async fn insert_class_section(
        &self,
        class_id: i32,
        name: &str,
    ) -> Result<entity::class_section::Model, TestError> {
        let now = Utc::now().naive_utc();
        let section = entity::class_section::ActiveModel {
            class_id: ActiveValue::Set(class_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(section.insert(self.db).await?)
    }

    pub async fn insert_subject(
        &self,
        school_id: i32,
        name: &str,
    ) -> Result<entity::subject::Model, TestError> {
        let now = Utc::now().naive_utc();
        let subject = entity::subject::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(subject.insert(self.db).await?)
    }
}
