use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to register a bus.
#[derive(Deserialize, ToSchema)]
pub struct CreateBusDto {
    pub school_id: i32,
    pub registration_number: String,
    pub capacity: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct BusDto {
    pub id: i32,
    pub school_id: i32,
    pub registration_number: String,
    pub capacity: Option<i32>,
}

impl From<entity::bus::Model> for BusDto {
    fn from(bus: entity::bus::Model) -> Self {
        Self {
            id: bus.id,
            school_id: bus.school_id,
            registration_number: bus.registration_number,
            capacity: bus.capacity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteTypeDto {
    Morning,
    Evening,
    Both,
}

impl From<RouteTypeDto> for entity::bus_route::RouteType {
    fn from(route_type: RouteTypeDto) -> Self {
        match route_type {
            RouteTypeDto::Morning => Self::Morning,
            RouteTypeDto::Evening => Self::Evening,
            RouteTypeDto::Both => Self::Both,
        }
    }
}

impl From<entity::bus_route::RouteType> for RouteTypeDto {
    fn from(route_type: entity::bus_route::RouteType) -> Self {
        match route_type {
            entity::bus_route::RouteType::Morning => Self::Morning,
            entity::bus_route::RouteType::Evening => Self::Evening,
            entity::bus_route::RouteType::Both => Self::Both,
        }
    }
}

/// One stop of a route, in caller-defined order.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RouteStopDto {
    pub name: String,
    pub lat: Decimal,
    pub lng: Decimal,
    pub order: i32,
    pub estimated_time: Option<String>,
}

impl From<RouteStopDto> for entity::bus_route::RouteStop {
    fn from(stop: RouteStopDto) -> Self {
        Self {
            name: stop.name,
            lat: stop.lat,
            lng: stop.lng,
            order: stop.order,
            estimated_time: stop.estimated_time,
        }
    }
}

impl From<entity::bus_route::RouteStop> for RouteStopDto {
    fn from(stop: entity::bus_route::RouteStop) -> Self {
        Self {
            name: stop.name,
            lat: stop.lat,
            lng: stop.lng,
            order: stop.order,
            estimated_time: stop.estimated_time,
        }
    }
}

/// Request to create a route for a bus.
#[derive(Deserialize, ToSchema)]
pub struct CreateRouteDto {
    pub bus_id: i32,
    pub route_name: String,
    pub route_type: RouteTypeDto,
    pub stops: Vec<RouteStopDto>,
}

#[derive(Serialize, ToSchema)]
pub struct RouteDto {
    pub id: i32,
    pub bus_id: i32,
    pub route_name: String,
    pub route_type: RouteTypeDto,
    pub stops: Vec<RouteStopDto>,
    pub is_active: bool,
}

impl From<entity::bus_route::Model> for RouteDto {
    fn from(route: entity::bus_route::Model) -> Self {
        Self {
            id: route.id,
            bus_id: route.bus_id,
            route_name: route.route_name,
            route_type: route.route_type.into(),
            stops: route.stops.0.into_iter().map(Into::into).collect(),
            is_active: route.is_active,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripTypeDto {
    Morning,
    Evening,
    Special,
}

impl From<TripTypeDto> for entity::bus_trip::TripType {
    fn from(trip_type: TripTypeDto) -> Self {
        match trip_type {
            TripTypeDto::Morning => Self::Morning,
            TripTypeDto::Evening => Self::Evening,
            TripTypeDto::Special => Self::Special,
        }
    }
}

/// Request to schedule a trip. Trips start in the NOT_STARTED state.
#[derive(Deserialize, ToSchema)]
pub struct CreateTripDto {
    pub bus_id: i32,
    pub bus_route_id: Option<i32>,
    pub trip_type: TripTypeDto,
}

/// One GPS report from a bus device. `recorded_at` defaults to the server clock
/// when the device omits it.
#[derive(Deserialize, ToSchema)]
pub struct ReportLocationDto {
    pub bus_id: i32,
    pub bus_trip_id: Option<i32>,
    pub lat: Decimal,
    pub lng: Decimal,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub accuracy: Option<f64>,
    pub recorded_at: Option<NaiveDateTime>,
}

#[derive(Serialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub bus_id: i32,
    pub bus_trip_id: Option<i32>,
    pub lat: Decimal,
    pub lng: Decimal,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub accuracy: Option<f64>,
    pub recorded_at: NaiveDateTime,
}

impl From<entity::bus_location::Model> for LocationDto {
    fn from(location: entity::bus_location::Model) -> Self {
        Self {
            id: location.id,
            bus_id: location.bus_id,
            bus_trip_id: location.bus_trip_id,
            lat: location.latitude,
            lng: location.longitude,
            speed: location.speed,
            heading: location.heading,
            accuracy: location.accuracy,
            recorded_at: location.recorded_at,
        }
    }
}

/// Time-range filter for bus location replay. `limit` caps the number of rows
/// returned, oldest first; it defaults to 1000 when omitted.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct LocationRangeParams {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub limit: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatusDto {
    NotStarted,
    InProgress,
    Completed,
    Cancelled,
}

impl From<TripStatusDto> for entity::bus_trip::TripStatus {
    fn from(status: TripStatusDto) -> Self {
        match status {
            TripStatusDto::NotStarted => Self::NotStarted,
            TripStatusDto::InProgress => Self::InProgress,
            TripStatusDto::Completed => Self::Completed,
            TripStatusDto::Cancelled => Self::Cancelled,
        }
    }
}

impl From<entity::bus_trip::TripStatus> for TripStatusDto {
    fn from(status: entity::bus_trip::TripStatus) -> Self {
        match status {
            entity::bus_trip::TripStatus::NotStarted => Self::NotStarted,
            entity::bus_trip::TripStatus::InProgress => Self::InProgress,
            entity::bus_trip::TripStatus::Completed => Self::Completed,
            entity::bus_trip::TripStatus::Cancelled => Self::Cancelled,
        }
    }
}

/// Request to move a trip to a new lifecycle status.
#[derive(Deserialize, ToSchema)]
pub struct AdvanceTripDto {
    pub status: TripStatusDto,
}

#[derive(Serialize, ToSchema)]
pub struct TripDto {
    pub id: i32,
    pub bus_id: i32,
    pub bus_route_id: Option<i32>,
    pub status: TripStatusDto,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl From<entity::bus_trip::Model> for TripDto {
    fn from(trip: entity::bus_trip::Model) -> Self {
        Self {
            id: trip.id,
            bus_id: trip.bus_id,
            bus_route_id: trip.bus_route_id,
            status: trip.status.into(),
            start_time: trip.start_time,
            end_time: trip.end_time,
        }
    }
}

/// Request to put a student on a bus.
#[derive(Deserialize, ToSchema)]
pub struct AssignStudentDto {
    pub student_id: i32,
    pub bus_id: i32,
    pub bus_route_id: Option<i32>,
    pub stop_name: Option<String>,
    pub pickup_time: Option<NaiveTime>,
    pub dropoff_time: Option<NaiveTime>,
}

#[derive(Deserialize, ToSchema)]
pub struct UnassignStudentDto {
    pub student_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub student_id: i32,
    pub bus_id: i32,
    pub bus_route_id: Option<i32>,
    pub stop_name: Option<String>,
    pub is_active: bool,
}

impl From<entity::student_bus_assignment::Model> for AssignmentDto {
    fn from(assignment: entity::student_bus_assignment::Model) -> Self {
        Self {
            id: assignment.id,
            student_id: assignment.student_id,
            bus_id: assignment.bus_id,
            bus_route_id: assignment.bus_route_id,
            stop_name: assignment.stop_name,
            is_active: assignment.is_active,
        }
    }
}
