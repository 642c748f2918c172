use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use entity::{
    bus_route::{RouteStop, RouteStops, RouteType},
    bus_trip::{TripStatus, TripType},
};

use crate::error::TestError;

pub struct TransportFixtures<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl TransportFixtures<'_> {
    pub async fn insert_bus(
        &self,
        school_id: i32,
        registration_number: &str,
    ) -> Result<entity::bus::Model, TestError> {
        let now = Utc::now().naive_utc();
        let bus = entity::bus::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            registration_number: ActiveValue::Set(registration_number.to_string()),
            capacity: ActiveValue::Set(Some(40)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(bus.insert(self.db).await?)
    }

    pub async fn insert_route(
        &self,
        school_id: i32,
        bus_id: i32,
        route_name: &str,
    ) -> Result<entity::bus_route::Model, TestError> {
        let now = Utc::now().naive_utc();
        let stops = RouteStops(vec![
            RouteStop {
                name: "Main Gate".to_string(),
                lat: Decimal::new(1252_0000, 6),
                lng: Decimal::new(7712_0000, 6),
                order: 1,
                estimated_time: Some("07:10".to_string()),
            },
            RouteStop {
                name: "Market Square".to_string(),
                lat: Decimal::new(1253_5000, 6),
                lng: Decimal::new(7713_2500, 6),
                order: 2,
                estimated_time: Some("07:25".to_string()),
            },
        ]);

        let route = entity::bus_route::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            bus_id: ActiveValue::Set(bus_id),
            route_name: ActiveValue::Set(route_name.to_string()),
            route_type: ActiveValue::Set(RouteType::Morning),
            stops: ActiveValue::Set(stops),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(route.insert(self.db).await?)
    }

    pub async fn insert_trip(
        &self,
        school_id: i32,
        bus_id: i32,
        bus_route_id: Option<i32>,
        status: TripStatus,
    ) -> Result<entity::bus_trip::Model, TestError> {
        let now = Utc::now().naive_utc();
        let trip = entity::bus_trip::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            bus_id: ActiveValue::Set(bus_id),
            bus_route_id: ActiveValue::Set(bus_route_id),
            trip_type: ActiveValue::Set(TripType::Morning),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(trip.insert(self.db).await?)
    }
}
