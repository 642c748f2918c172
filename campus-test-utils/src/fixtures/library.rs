use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct LibraryFixtures<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl LibraryFixtures<'_> {
    pub async fn insert_section(
        &self,
        school_id: i32,
        name: &str,
    ) -> Result<entity::library_section::Model, TestError> {
        let now = Utc::now().naive_utc();
        let section = entity::library_section::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(section.insert(self.db).await?)
    }

    /// Inserts a book with all copies on the shelf (`available == quantity`).
    pub async fn insert_book(
        &self,
        school_id: i32,
        title: &str,
        quantity: i32,
    ) -> Result<entity::book::Model, TestError> {
        self.insert_book_with_availability(school_id, title, quantity, quantity)
            .await
    }

    pub async fn insert_book_with_availability(
        &self,
        school_id: i32,
        title: &str,
        quantity: i32,
        available: i32,
    ) -> Result<entity::book::Model, TestError> {
        let now = Utc::now().naive_utc();
        let book = entity::book::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            title: ActiveValue::Set(title.to_string()),
            quantity: ActiveValue::Set(quantity),
            available: ActiveValue::Set(available),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(book.insert(self.db).await?)
    }
}
