use entity::prelude::Archivable;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct SubjectRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a non-deleted subject by ID
    pub async fn get_by_id(&self, subject_id: i32) -> Result<Option<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find_active()
            .filter(entity::subject::Column::Id.eq(subject_id))
            .one(self.db)
            .await
    }
}
