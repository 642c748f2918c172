use chrono::{NaiveDateTime, NaiveTime, Utc};
use entity::bus_trip::TripStatus;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        org::student::StudentRepository,
        transport::{
            assignment::AssignmentRepository, bus::BusRepository, location::LocationRepository,
            route::RouteRepository, trip::TripRepository,
        },
    },
    error::Error,
};

/// One GPS report as submitted by a device on the bus.
#[derive(Clone, Copy, Debug)]
pub struct LocationReport {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub accuracy: Option<f64>,
    pub recorded_at: Option<NaiveDateTime>,
}

/// Row cap for location replay when the caller does not name one.
const DEFAULT_HISTORY_LIMIT: u64 = 1000;

fn transition_allowed(from: TripStatus, to: TripStatus) -> bool {
    matches!(
        (from, to),
        (TripStatus::NotStarted, TripStatus::InProgress)
            | (TripStatus::NotStarted, TripStatus::Cancelled)
            | (TripStatus::InProgress, TripStatus::Completed)
            | (TripStatus::InProgress, TripStatus::Cancelled)
    )
}

pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingService<'a> {
    /// Creates a new instance of [`TrackingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a bus for a school
    pub async fn register_bus(
        &self,
        school_id: i32,
        registration_number: String,
        capacity: Option<i32>,
    ) -> Result<entity::bus::Model, Error> {
        if registration_number.trim().is_empty() {
            return Err(Error::Validation(
                "Registration number must not be empty".to_string(),
            ));
        }

        if capacity.is_some_and(|c| c <= 0) {
            return Err(Error::Validation(
                "Capacity must be positive".to_string(),
            ));
        }

        let bus_repo = BusRepository::new(self.db);

        Ok(bus_repo
            .create(school_id, registration_number, capacity)
            .await?)
    }

    /// Create a route for a bus. Stop order is caller-defined and stored as given.
    pub async fn create_route(
        &self,
        bus_id: i32,
        route_name: String,
        route_type: entity::bus_route::RouteType,
        stops: entity::bus_route::RouteStops,
    ) -> Result<entity::bus_route::Model, Error> {
        if stops.0.is_empty() {
            return Err(Error::Validation(
                "A route needs at least one stop".to_string(),
            ));
        }

        let bus_repo = BusRepository::new(self.db);
        let route_repo = RouteRepository::new(self.db);

        let bus = bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        Ok(route_repo
            .create(bus.school_id, bus_id, route_name, route_type, stops)
            .await?)
    }

    /// Soft-delete a route
    pub async fn delete_route(&self, route_id: i32) -> Result<(), Error> {
        let route_repo = RouteRepository::new(self.db);

        let route = route_repo
            .get_by_id(route_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Route",
                id: route_id,
            })?;

        route_repo.soft_delete(route).await?;

        Ok(())
    }

    /// Schedule a trip for a bus, starting in the NotStarted state
    pub async fn schedule_trip(
        &self,
        bus_id: i32,
        bus_route_id: Option<i32>,
        trip_type: entity::bus_trip::TripType,
    ) -> Result<entity::bus_trip::Model, Error> {
        let bus_repo = BusRepository::new(self.db);
        let route_repo = RouteRepository::new(self.db);
        let trip_repo = TripRepository::new(self.db);

        let bus = bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        if let Some(route_id) = bus_route_id {
            let route = route_repo
                .get_by_id(route_id)
                .await?
                .ok_or(Error::NotFound {
                    entity: "Route",
                    id: route_id,
                })?;

            if route.bus_id != bus_id {
                return Err(Error::Validation(
                    "Route does not belong to this bus".to_string(),
                ));
            }
        }

        Ok(trip_repo
            .create(bus.school_id, bus_id, bus_route_id, trip_type)
            .await?)
    }

    /// Record a GPS report for a bus.
    ///
    /// Coordinates, heading, speed and accuracy are range-checked before the row
    /// is appended. When a trip is named it must belong to the same bus.
    pub async fn record_location(
        &self,
        bus_id: i32,
        bus_trip_id: Option<i32>,
        report: LocationReport,
    ) -> Result<entity::bus_location::Model, Error> {
        validate_report(&report)?;

        let bus_repo = BusRepository::new(self.db);
        let trip_repo = TripRepository::new(self.db);
        let location_repo = LocationRepository::new(self.db);

        bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        if let Some(trip_id) = bus_trip_id {
            let trip = trip_repo.get_by_id(trip_id).await?.ok_or(Error::NotFound {
                entity: "Trip",
                id: trip_id,
            })?;

            if trip.bus_id != bus_id {
                return Err(Error::Validation(
                    "Trip does not belong to this bus".to_string(),
                ));
            }
        }

        let recorded_at = report.recorded_at.unwrap_or_else(|| Utc::now().naive_utc());

        let location = location_repo
            .create(
                bus_id,
                bus_trip_id,
                report.latitude,
                report.longitude,
                report.speed,
                report.heading,
                report.accuracy,
                recorded_at,
            )
            .await?;

        Ok(location)
    }

    /// Latest known position of a bus
    pub async fn latest_location(
        &self,
        bus_id: i32,
    ) -> Result<entity::bus_location::Model, Error> {
        let bus_repo = BusRepository::new(self.db);
        let location_repo = LocationRepository::new(self.db);

        bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        location_repo
            .latest_for_bus(bus_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Location for bus",
                id: bus_id,
            })
    }

    /// Replay a bus's reports within a time window, oldest first.
    ///
    /// At most `limit` rows come back (`DEFAULT_HISTORY_LIMIT` when the caller
    /// passes None), counted from the start of the window.
    pub async fn location_history(
        &self,
        bus_id: i32,
        from: NaiveDateTime,
        to: NaiveDateTime,
        limit: Option<u64>,
    ) -> Result<Vec<entity::bus_location::Model>, Error> {
        if from > to {
            return Err(Error::Validation(
                "Range start must not be after range end".to_string(),
            ));
        }

        let bus_repo = BusRepository::new(self.db);
        let location_repo = LocationRepository::new(self.db);

        bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        Ok(location_repo
            .list_for_bus_in_range(bus_id, from, to, limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
            .await?)
    }

    /// Every report recorded against a trip, oldest first
    pub async fn trip_locations(
        &self,
        trip_id: i32,
    ) -> Result<Vec<entity::bus_location::Model>, Error> {
        let trip_repo = TripRepository::new(self.db);
        let location_repo = LocationRepository::new(self.db);

        trip_repo.get_by_id(trip_id).await?.ok_or(Error::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

        Ok(location_repo.list_for_trip(trip_id).await?)
    }

    /// Move a trip through its lifecycle.
    ///
    /// The only legal moves are NotStarted to InProgress or Cancelled, and
    /// InProgress to Completed or Cancelled. Starting stamps `start_time`;
    /// completing or cancelling stamps `end_time`.
    pub async fn advance_trip(
        &self,
        trip_id: i32,
        target: TripStatus,
    ) -> Result<entity::bus_trip::Model, Error> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);

        let trip = trip_repo.get_by_id(trip_id).await?.ok_or(Error::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

        if !transition_allowed(trip.status, target) {
            return Err(Error::InvalidState(format!(
                "Trip cannot move from {:?} to {:?}",
                trip.status, target
            )));
        }

        let now = Utc::now().naive_utc();
        let (start_time, end_time) = match target {
            TripStatus::InProgress => (Some(now), None),
            TripStatus::Completed | TripStatus::Cancelled => (None, Some(now)),
            TripStatus::NotStarted => (None, None),
        };

        let trip = trip_repo
            .update_status(trip, target, start_time, end_time)
            .await?;

        txn.commit().await?;

        Ok(trip)
    }

    /// Assign a student to a bus.
    ///
    /// A student rides at most one bus at a time; the check and the insert share
    /// a transaction so two concurrent assignments cannot both land.
    #[allow(clippy::too_many_arguments)]
    pub async fn assign_student(
        &self,
        student_id: i32,
        bus_id: i32,
        bus_route_id: Option<i32>,
        stop_name: Option<String>,
        pickup_time: Option<NaiveTime>,
        dropoff_time: Option<NaiveTime>,
    ) -> Result<entity::student_bus_assignment::Model, Error> {
        let txn = self.db.begin().await?;

        let student_repo = StudentRepository::new(&txn);
        let bus_repo = BusRepository::new(&txn);
        let route_repo = RouteRepository::new(&txn);
        let assignment_repo = AssignmentRepository::new(&txn);

        let student = student_repo
            .get_by_id(student_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Student",
                id: student_id,
            })?;

        let bus = bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        if student.school_id != bus.school_id {
            return Err(Error::Validation(
                "Student and bus belong to different schools".to_string(),
            ));
        }

        if let Some(route_id) = bus_route_id {
            let route = route_repo
                .get_by_id(route_id)
                .await?
                .ok_or(Error::NotFound {
                    entity: "Route",
                    id: route_id,
                })?;

            if route.bus_id != bus_id {
                return Err(Error::Validation(
                    "Route does not belong to this bus".to_string(),
                ));
            }
        }

        if assignment_repo
            .find_active_by_student(student_id)
            .await?
            .is_some()
        {
            return Err(Error::AlreadyAssigned(student_id));
        }

        let assignment = assignment_repo
            .create_active(
                bus.school_id,
                student_id,
                bus_id,
                bus_route_id,
                stop_name,
                pickup_time,
                dropoff_time,
            )
            .await?;

        txn.commit().await?;

        Ok(assignment)
    }

    /// Take a student off their bus. Idempotent: unassigning a student with no
    /// active assignment is a no-op.
    pub async fn unassign_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student_bus_assignment::Model>, Error> {
        let txn = self.db.begin().await?;
        let assignment_repo = AssignmentRepository::new(&txn);

        let Some(assignment) = assignment_repo.find_active_by_student(student_id).await? else {
            return Ok(None);
        };

        let assignment = assignment_repo.deactivate(assignment).await?;

        txn.commit().await?;

        Ok(Some(assignment))
    }

    /// Active riders of a bus
    pub async fn bus_roster(
        &self,
        bus_id: i32,
    ) -> Result<Vec<entity::student_bus_assignment::Model>, Error> {
        let bus_repo = BusRepository::new(self.db);
        let assignment_repo = AssignmentRepository::new(self.db);

        bus_repo.get_by_id(bus_id).await?.ok_or(Error::NotFound {
            entity: "Bus",
            id: bus_id,
        })?;

        Ok(assignment_repo.list_active_by_bus(bus_id).await?)
    }
}

fn validate_report(report: &LocationReport) -> Result<(), Error> {
    let lat_min = Decimal::from(-90);
    let lat_max = Decimal::from(90);
    let lng_min = Decimal::from(-180);
    let lng_max = Decimal::from(180);

    if report.latitude < lat_min || report.latitude > lat_max {
        return Err(Error::Validation(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }

    if report.longitude < lng_min || report.longitude > lng_max {
        return Err(Error::Validation(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }

    if let Some(heading) = report.heading {
        if !(0.0..=360.0).contains(&heading) {
            return Err(Error::Validation(
                "Heading must be between 0 and 360 degrees".to_string(),
            ));
        }
    }

    if let Some(speed) = report.speed {
        if speed < 0.0 {
            return Err(Error::Validation("Speed must not be negative".to_string()));
        }
    }

    if let Some(accuracy) = report.accuracy {
        if accuracy < 0.0 {
            return Err(Error::Validation(
                "Accuracy must not be negative".to_string(),
            ));
        }
    }

    Ok(())
}
