use entity::prelude::Archivable;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct LibrarySectionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LibrarySectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a non-deleted library section by ID
    pub async fn get_by_id(
        &self,
        section_id: i32,
    ) -> Result<Option<entity::library_section::Model>, DbErr> {
        entity::prelude::LibrarySection::find_active()
            .filter(entity::library_section::Column::Id.eq(section_id))
            .one(self.db)
            .await
    }
}
