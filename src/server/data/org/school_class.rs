use entity::prelude::Archivable;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct SchoolClassRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchoolClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a non-deleted class by ID
    pub async fn get_by_id(
        &self,
        class_id: i32,
    ) -> Result<Option<entity::school_class::Model>, DbErr> {
        entity::prelude::SchoolClass::find_active()
            .filter(entity::school_class::Column::Id.eq(class_id))
            .one(self.db)
            .await
    }
}
