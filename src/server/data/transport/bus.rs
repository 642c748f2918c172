use chrono::Utc;
use entity::prelude::Archivable;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct BusRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Register a bus
    pub async fn create(
        &self,
        school_id: i32,
        registration_number: String,
        capacity: Option<i32>,
    ) -> Result<entity::bus::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let bus = entity::bus::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            registration_number: ActiveValue::Set(registration_number),
            capacity: ActiveValue::Set(capacity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        bus.insert(self.db).await
    }

    /// Get a non-deleted bus by ID
    pub async fn get_by_id(&self, bus_id: i32) -> Result<Option<entity::bus::Model>, DbErr> {
        entity::prelude::Bus::find_active()
            .filter(entity::bus::Column::Id.eq(bus_id))
            .one(self.db)
            .await
    }

    /// List non-deleted buses belonging to a school
    pub async fn list_by_school(&self, school_id: i32) -> Result<Vec<entity::bus::Model>, DbErr> {
        entity::prelude::Bus::find_active()
            .filter(entity::bus::Column::SchoolId.eq(school_id))
            .all(self.db)
            .await
    }
}
