use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        transport::{
            AdvanceTripDto, AssignStudentDto, AssignmentDto, BusDto, CreateBusDto, CreateRouteDto,
            CreateTripDto, LocationDto, LocationRangeParams, ReportLocationDto, RouteDto, TripDto,
            UnassignStudentDto,
        },
    },
    server::{
        data::transport::{bus::BusRepository, route::RouteRepository},
        error::Error,
        model::app::AppState,
        service::transport::tracking::{LocationReport, TrackingService},
    },
};

pub static TRANSPORT_TAG: &str = "transport";

#[derive(Deserialize, IntoParams)]
pub struct FleetScopeParams {
    pub school_id: i32,
}

/// Register a bus
#[utoipa::path(
    post,
    path = "/api/transport/buses",
    tag = TRANSPORT_TAG,
    request_body = CreateBusDto,
    responses(
        (status = 201, description = "Bus registered", body = BusDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bus(
    State(state): State<AppState>,
    Json(dto): Json<CreateBusDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let bus = tracking_service
        .register_bus(dto.school_id, dto.registration_number, dto.capacity)
        .await?;

    Ok((StatusCode::CREATED, Json(BusDto::from(bus))))
}

/// List a school's buses
#[utoipa::path(
    get,
    path = "/api/transport/buses",
    tag = TRANSPORT_TAG,
    params(FleetScopeParams),
    responses(
        (status = 200, description = "Buses listed", body = Vec<BusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_buses(
    State(state): State<AppState>,
    Query(params): Query<FleetScopeParams>,
) -> Result<impl IntoResponse, Error> {
    let bus_repository = BusRepository::new(&state.db);

    let buses = bus_repository.list_by_school(params.school_id).await?;
    let buses: Vec<BusDto> = buses.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(buses)))
}

/// List a bus's routes
#[utoipa::path(
    get,
    path = "/api/transport/buses/{bus_id}/routes",
    tag = TRANSPORT_TAG,
    params(("bus_id" = i32, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Routes listed", body = Vec<RouteDto>),
        (status = 404, description = "Bus not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bus_routes(
    State(state): State<AppState>,
    Path(bus_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bus_repository = BusRepository::new(&state.db);
    let route_repository = RouteRepository::new(&state.db);

    bus_repository
        .get_by_id(bus_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

    let routes = route_repository.list_by_bus(bus_id).await?;
    let routes: Vec<RouteDto> = routes.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(routes)))
}

/// Create a route for a bus
#[utoipa::path(
    post,
    path = "/api/transport/routes",
    tag = TRANSPORT_TAG,
    request_body = CreateRouteDto,
    responses(
        (status = 201, description = "Route created", body = RouteDto),
        (status = 404, description = "Bus not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    Json(dto): Json<CreateRouteDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let stops = entity::bus_route::RouteStops(dto.stops.into_iter().map(Into::into).collect());

    let route = tracking_service
        .create_route(dto.bus_id, dto.route_name, dto.route_type.into(), stops)
        .await?;

    Ok((StatusCode::CREATED, Json(RouteDto::from(route))))
}

/// Delete a route
#[utoipa::path(
    delete,
    path = "/api/transport/routes/{route_id}",
    tag = TRANSPORT_TAG,
    params(("route_id" = i32, Path, description = "Route ID")),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_route(
    State(state): State<AppState>,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    tracking_service.delete_route(route_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Schedule a trip
#[utoipa::path(
    post,
    path = "/api/transport/trips",
    tag = TRANSPORT_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Trip scheduled", body = TripDto),
        (status = 404, description = "Bus or route not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    Json(dto): Json<CreateTripDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let trip = tracking_service
        .schedule_trip(dto.bus_id, dto.bus_route_id, dto.trip_type.into())
        .await?;

    Ok((StatusCode::CREATED, Json(TripDto::from(trip))))
}

/// Move a trip through its lifecycle
#[utoipa::path(
    post,
    path = "/api/transport/trips/{trip_id}/status",
    tag = TRANSPORT_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = AdvanceTripDto,
    responses(
        (status = 200, description = "Trip advanced", body = TripDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn advance_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
    Json(dto): Json<AdvanceTripDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let trip = tracking_service
        .advance_trip(trip_id, dto.status.into())
        .await?;

    Ok((StatusCode::OK, Json(TripDto::from(trip))))
}

/// Record a GPS report from a bus device
#[utoipa::path(
    post,
    path = "/api/transport/locations",
    tag = TRANSPORT_TAG,
    request_body = ReportLocationDto,
    responses(
        (status = 201, description = "Location recorded", body = LocationDto),
        (status = 404, description = "Bus or trip not found", body = ErrorDto),
        (status = 422, description = "Out-of-range coordinates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_location(
    State(state): State<AppState>,
    Json(dto): Json<ReportLocationDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let report = LocationReport {
        latitude: dto.lat,
        longitude: dto.lng,
        speed: dto.speed,
        heading: dto.heading,
        accuracy: dto.accuracy,
        recorded_at: dto.recorded_at,
    };

    let location = tracking_service
        .record_location(dto.bus_id, dto.bus_trip_id, report)
        .await?;

    Ok((StatusCode::CREATED, Json(LocationDto::from(location))))
}

/// Latest known position of a bus
#[utoipa::path(
    get,
    path = "/api/transport/buses/{bus_id}/location",
    tag = TRANSPORT_TAG,
    params(("bus_id" = i32, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Latest location", body = LocationDto),
        (status = 404, description = "Bus or location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_location(
    State(state): State<AppState>,
    Path(bus_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let location = tracking_service.latest_location(bus_id).await?;

    Ok((StatusCode::OK, Json(LocationDto::from(location))))
}

/// Replay a bus's GPS reports. The window defaults to the last 24 hours and
/// the row limit to 1000.
#[utoipa::path(
    get,
    path = "/api/transport/buses/{bus_id}/locations",
    tag = TRANSPORT_TAG,
    params(
        ("bus_id" = i32, Path, description = "Bus ID"),
        LocationRangeParams
    ),
    responses(
        (status = 200, description = "Locations listed oldest first", body = Vec<LocationDto>),
        (status = 404, description = "Bus not found", body = ErrorDto),
        (status = 422, description = "Invalid time range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_locations(
    State(state): State<AppState>,
    Path(bus_id): Path<i32>,
    Query(params): Query<LocationRangeParams>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let now = Utc::now().naive_utc();
    let to = params.to.unwrap_or(now);
    let from = params.from.unwrap_or(to - Duration::hours(24));

    let locations = tracking_service
        .location_history(bus_id, from, to, params.limit)
        .await?;
    let locations: Vec<LocationDto> = locations.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(locations)))
}

/// Every GPS report recorded against a trip
#[utoipa::path(
    get,
    path = "/api/transport/trips/{trip_id}/locations",
    tag = TRANSPORT_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Locations listed oldest first", body = Vec<LocationDto>),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trip_locations(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let locations = tracking_service.trip_locations(trip_id).await?;
    let locations: Vec<LocationDto> = locations.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(locations)))
}

/// Put a student on a bus
#[utoipa::path(
    post,
    path = "/api/transport/assignments",
    tag = TRANSPORT_TAG,
    request_body = AssignStudentDto,
    responses(
        (status = 201, description = "Student assigned", body = AssignmentDto),
        (status = 404, description = "Student, bus or route not found", body = ErrorDto),
        (status = 409, description = "Student already has an active assignment", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_student(
    State(state): State<AppState>,
    Json(dto): Json<AssignStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let assignment = tracking_service
        .assign_student(
            dto.student_id,
            dto.bus_id,
            dto.bus_route_id,
            dto.stop_name,
            dto.pickup_time,
            dto.dropoff_time,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AssignmentDto::from(assignment))))
}

/// Take a student off their bus. A no-op when nothing is assigned.
#[utoipa::path(
    post,
    path = "/api/transport/assignments/unassign",
    tag = TRANSPORT_TAG,
    request_body = UnassignStudentDto,
    responses(
        (status = 204, description = "Student unassigned"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_student(
    State(state): State<AppState>,
    Json(dto): Json<UnassignStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    tracking_service.unassign_student(dto.student_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Active riders of a bus
#[utoipa::path(
    get,
    path = "/api/transport/buses/{bus_id}/roster",
    tag = TRANSPORT_TAG,
    params(("bus_id" = i32, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Roster listed", body = Vec<AssignmentDto>),
        (status = 404, description = "Bus not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bus_roster(
    State(state): State<AppState>,
    Path(bus_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tracking_service = TrackingService::new(&state.db);

    let assignments = tracking_service.bus_roster(bus_id).await?;
    let assignments: Vec<AssignmentDto> = assignments.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(assignments)))
}
