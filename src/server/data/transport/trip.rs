use chrono::{NaiveDateTime, Utc};
use entity::bus_trip::{TripStatus, TripType};
use entity::prelude::Archivable;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct TripRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a trip in the NotStarted state
    pub async fn create(
        &self,
        school_id: i32,
        bus_id: i32,
        bus_route_id: Option<i32>,
        trip_type: TripType,
    ) -> Result<entity::bus_trip::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let trip = entity::bus_trip::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            bus_id: ActiveValue::Set(bus_id),
            bus_route_id: ActiveValue::Set(bus_route_id),
            trip_type: ActiveValue::Set(trip_type),
            status: ActiveValue::Set(TripStatus::NotStarted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        trip.insert(self.db).await
    }

    /// Get a non-deleted trip by ID
    pub async fn get_by_id(&self, trip_id: i32) -> Result<Option<entity::bus_trip::Model>, DbErr> {
        entity::prelude::BusTrip::find_active()
            .filter(entity::bus_trip::Column::Id.eq(trip_id))
            .one(self.db)
            .await
    }

    /// Move a trip to a new status, stamping start or end time when given
    pub async fn update_status(
        &self,
        trip: entity::bus_trip::Model,
        status: TripStatus,
        start_time: Option<NaiveDateTime>,
        end_time: Option<NaiveDateTime>,
    ) -> Result<entity::bus_trip::Model, DbErr> {
        let mut trip: entity::bus_trip::ActiveModel = trip.into();
        trip.status = ActiveValue::Set(status);
        if let Some(start_time) = start_time {
            trip.start_time = ActiveValue::Set(Some(start_time));
        }
        if let Some(end_time) = end_time {
            trip.end_time = ActiveValue::Set(Some(end_time));
        }
        trip.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        trip.update(self.db).await
    }
}
