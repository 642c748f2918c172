use entity::prelude::Archivable;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a non-deleted student by ID
    pub async fn get_by_id(&self, student_id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_active()
            .filter(entity::student::Column::Id.eq(student_id))
            .one(self.db)
            .await
    }
}
