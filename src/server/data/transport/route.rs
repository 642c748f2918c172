use chrono::Utc;
use entity::bus_route::{RouteStops, RouteType};
use entity::prelude::Archivable;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct RouteRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a route for a bus, active by default
    pub async fn create(
        &self,
        school_id: i32,
        bus_id: i32,
        route_name: String,
        route_type: RouteType,
        stops: RouteStops,
    ) -> Result<entity::bus_route::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let route = entity::bus_route::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            bus_id: ActiveValue::Set(bus_id),
            route_name: ActiveValue::Set(route_name),
            route_type: ActiveValue::Set(route_type),
            stops: ActiveValue::Set(stops),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        route.insert(self.db).await
    }

    /// Get a non-deleted route by ID
    pub async fn get_by_id(
        &self,
        route_id: i32,
    ) -> Result<Option<entity::bus_route::Model>, DbErr> {
        entity::prelude::BusRoute::find_active()
            .filter(entity::bus_route::Column::Id.eq(route_id))
            .one(self.db)
            .await
    }

    /// List a bus's non-deleted routes
    pub async fn list_by_bus(&self, bus_id: i32) -> Result<Vec<entity::bus_route::Model>, DbErr> {
        entity::prelude::BusRoute::find_active()
            .filter(entity::bus_route::Column::BusId.eq(bus_id))
            .all(self.db)
            .await
    }

    /// Soft-delete a route
    pub async fn soft_delete(
        &self,
        route: entity::bus_route::Model,
    ) -> Result<entity::bus_route::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut route: entity::bus_route::ActiveModel = route.into();
        route.deleted_at = ActiveValue::Set(Some(now));
        route.updated_at = ActiveValue::Set(now);

        route.update(self.db).await
    }
}
