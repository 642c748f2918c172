use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use campus::{
    model::transport::{
        AdvanceTripDto, AssignStudentDto, ReportLocationDto, TripStatusDto, UnassignStudentDto,
    },
    server::controller::transport::{
        advance_trip, assign_student, get_latest_location, record_location, unassign_student,
    },
    server::model::app::AppState,
};
use campus_test_utils::{TestBuilder, TestError};
use entity::bus_trip::TripStatus;
use rust_decimal::Decimal;

fn report(bus_id: i32, lat: i64, lng: i64) -> ReportLocationDto {
    ReportLocationDto {
        bus_id,
        bus_trip_id: None,
        lat: Decimal::from(lat),
        lng: Decimal::from(lng),
        speed: None,
        heading: None,
        accuracy: None,
        recorded_at: None,
    }
}

/// Expect 201 when recording a valid location
#[tokio::test]
async fn record_location_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_transport_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;
    let state: AppState = test.to_app_state();

    let result = record_location(State(state), Json(report(bus.id, 12, 77))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 for an out-of-range longitude
#[tokio::test]
async fn record_location_rejects_bad_longitude() -> Result<(), TestError> {
    let test = TestBuilder::new().with_transport_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;
    let state: AppState = test.to_app_state();

    let result = record_location(State(state), Json(report(bus.id, 12, 181))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 404 when no location has been recorded yet
#[tokio::test]
async fn latest_location_not_found_without_reports() -> Result<(), TestError> {
    let test = TestBuilder::new().with_transport_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;
    let state: AppState = test.to_app_state();

    let result = get_latest_location(State(state), Path(bus.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 for an illegal trip transition
#[tokio::test]
async fn advance_trip_conflicts_on_illegal_move() -> Result<(), TestError> {
    let test = TestBuilder::new().with_transport_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;
    let trip = test
        .transport()
        .insert_trip(school.id, bus.id, None, TripStatus::NotStarted)
        .await?;
    let state: AppState = test.to_app_state();

    let result = advance_trip(
        State(state),
        Path(trip.id),
        Json(AdvanceTripDto {
            status: TripStatusDto::Completed,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 when assigning a student who is already riding a bus
#[tokio::test]
async fn assign_student_conflicts_when_already_assigned() -> Result<(), TestError> {
    let test = TestBuilder::new().with_transport_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let student = test.org().insert_student(school.id).await?;
    let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;
    let state: AppState = test.to_app_state();

    let dto = |student_id, bus_id| AssignStudentDto {
        student_id,
        bus_id,
        bus_route_id: None,
        stop_name: None,
        pickup_time: None,
        dropoff_time: None,
    };

    let resp = assign_student(State(state.clone()), Json(dto(student.id, bus.id)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = assign_student(State(state), Json(dto(student.id, bus.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 204 when unassigning a student with no assignment
#[tokio::test]
async fn unassign_student_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_transport_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let student = test.org().insert_student(school.id).await?;
    let state: AppState = test.to_app_state();

    let result = unassign_student(
        State(state),
        Json(UnassignStudentDto {
            student_id: student.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
