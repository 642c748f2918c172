use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use campus::{
    model::library::{CreateBookDto, IssueLoanDto},
    server::controller::library::{
        create_book, get_book, issue_loan, list_overdue_loans, return_loan, SchoolScopeParams,
    },
    server::model::app::AppState,
};
use campus_test_utils::{TestBuilder, TestError};

/// Expect 201 when creating a book
#[tokio::test]
async fn create_book_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let state: AppState = test.to_app_state();

    let result = create_book(
        State(state),
        Json(CreateBookDto {
            school_id: school.id,
            library_section_id: None,
            title: "Dune".to_string(),
            author: Some("Frank Herbert".to_string()),
            isbn: None,
            quantity: 3,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 when creating a book with zero copies
#[tokio::test]
async fn create_book_rejects_zero_quantity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let state: AppState = test.to_app_state();

    let result = create_book(
        State(state),
        Json(CreateBookDto {
            school_id: school.id,
            library_section_id: None,
            title: "Dune".to_string(),
            author: None,
            isbn: None,
            quantity: 0,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 201 when shelving the book under an existing library section
#[tokio::test]
async fn create_book_accepts_known_section() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let section = test.library().insert_section(school.id, "Fiction").await?;
    let state: AppState = test.to_app_state();

    let result = create_book(
        State(state),
        Json(CreateBookDto {
            school_id: school.id,
            library_section_id: Some(section.id),
            title: "Dune".to_string(),
            author: None,
            isbn: None,
            quantity: 1,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 when the named library section does not exist
#[tokio::test]
async fn create_book_rejects_unknown_section() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let state: AppState = test.to_app_state();

    let result = create_book(
        State(state),
        Json(CreateBookDto {
            school_id: school.id,
            library_section_id: Some(999),
            title: "Dune".to_string(),
            author: None,
            isbn: None,
            quantity: 1,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a book that does not exist
#[tokio::test]
async fn get_book_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = get_book(State(state), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 201 when issuing an available book
#[tokio::test]
async fn issue_loan_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let student = test.org().insert_student(school.id).await?;
    let book = test.library().insert_book(school.id, "Dune", 1).await?;
    let state: AppState = test.to_app_state();

    let result = issue_loan(
        State(state),
        Json(IssueLoanDto {
            book_id: book.id,
            student_id: student.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 when issuing a book with no available copy
#[tokio::test]
async fn issue_loan_conflicts_when_out_of_stock() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let student = test.org().insert_student(school.id).await?;
    let book = test
        .library()
        .insert_book_with_availability(school.id, "Dune", 1, 0)
        .await?;
    let state: AppState = test.to_app_state();

    let result = issue_loan(
        State(state),
        Json(IssueLoanDto {
            book_id: book.id,
            student_id: student.id,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 when returning the same loan twice
#[tokio::test]
async fn return_loan_conflicts_on_second_return() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let student = test.org().insert_student(school.id).await?;
    let book = test.library().insert_book(school.id, "Dune", 1).await?;
    let state: AppState = test.to_app_state();

    let resp = issue_loan(
        State(state.clone()),
        Json(IssueLoanDto {
            book_id: book.id,
            student_id: student.id,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // The loan is the first row in a fresh database
    let loan_id = 1;

    let result = return_loan(State(state.clone()), Path(loan_id)).await;
    assert!(result.is_ok());

    let result = return_loan(State(state), Path(loan_id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with an empty list when nothing is overdue
#[tokio::test]
async fn overdue_list_is_empty_without_loans() -> Result<(), TestError> {
    let test = TestBuilder::new().with_library_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let state: AppState = test.to_app_state();

    let result = list_overdue_loans(
        State(state),
        Query(SchoolScopeParams {
            school_id: school.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 500 when the book table does not exist
#[tokio::test]
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::School)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = get_book(State(state), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
