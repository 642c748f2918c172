use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        library::{BookDto, CreateBookDto, IssueLoanDto, LoanDto, LoanStateDto, RenewLoanDto},
    },
    server::{
        data::library::{book::BookRepository, section::LibrarySectionRepository},
        error::Error,
        model::app::AppState,
        service::library::circulation::{CirculationService, LoanState},
    },
};

pub static LIBRARY_TAG: &str = "library";

#[derive(Deserialize, IntoParams)]
pub struct SchoolScopeParams {
    pub school_id: i32,
}

fn loan_dto(loan: entity::library_transaction::Model) -> LoanDto {
    let state = match CirculationService::state_of(&loan, Utc::now().naive_utc()) {
        LoanState::Issued => LoanStateDto::Issued,
        LoanState::Overdue => LoanStateDto::Overdue,
        LoanState::Returned => LoanStateDto::Returned,
    };

    LoanDto {
        id: loan.id,
        book_id: loan.book_id,
        student_id: loan.student_id,
        state,
        issue_date: loan.issue_date,
        due_date: loan.due_date,
        return_date: loan.return_date,
        fine_amount: loan.fine_amount,
    }
}

/// Add a book to a school's catalogue
#[utoipa::path(
    post,
    path = "/api/library/books",
    tag = LIBRARY_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 404, description = "Library section not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(dto): Json<CreateBookDto>,
) -> Result<impl IntoResponse, Error> {
    if dto.quantity < 1 {
        return Err(Error::Validation("Quantity must be at least 1".to_string()));
    }

    if let Some(section_id) = dto.library_section_id {
        LibrarySectionRepository::new(&state.db)
            .get_by_id(section_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Library section",
                id: section_id,
            })?;
    }

    let book_repository = BookRepository::new(&state.db);

    let book = book_repository
        .create(
            dto.school_id,
            dto.library_section_id,
            dto.title,
            dto.author,
            dto.isbn,
            dto.quantity,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BookDto::from(book))))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/library/books/{book_id}",
    tag = LIBRARY_TAG,
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let book_repository = BookRepository::new(&state.db);

    let book = book_repository
        .get_by_id(book_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Book",
            id: book_id,
        })?;

    Ok((StatusCode::OK, Json(BookDto::from(book))))
}

/// List a school's books
#[utoipa::path(
    get,
    path = "/api/library/books",
    tag = LIBRARY_TAG,
    params(SchoolScopeParams),
    responses(
        (status = 200, description = "Books listed", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<SchoolScopeParams>,
) -> Result<impl IntoResponse, Error> {
    let book_repository = BookRepository::new(&state.db);

    let books = book_repository.list_by_school(params.school_id).await?;
    let books: Vec<BookDto> = books.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(books)))
}

/// Issue a book to a student
#[utoipa::path(
    post,
    path = "/api/library/loans",
    tag = LIBRARY_TAG,
    request_body = IssueLoanDto,
    responses(
        (status = 201, description = "Loan opened", body = LoanDto),
        (status = 404, description = "Book or student not found", body = ErrorDto),
        (status = 409, description = "No copy available", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_loan(
    State(state): State<AppState>,
    Json(dto): Json<IssueLoanDto>,
) -> Result<impl IntoResponse, Error> {
    let circulation_service = CirculationService::new(&state.db);

    let loan = circulation_service.issue(dto.book_id, dto.student_id).await?;

    Ok((StatusCode::CREATED, Json(loan_dto(loan))))
}

/// Get a loan by ID
#[utoipa::path(
    get,
    path = "/api/library/loans/{loan_id}",
    tag = LIBRARY_TAG,
    params(("loan_id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan found", body = LoanDto),
        (status = 404, description = "Loan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let circulation_service = CirculationService::new(&state.db);

    let loan = circulation_service.get_loan(loan_id).await?;

    Ok((StatusCode::OK, Json(loan_dto(loan))))
}

/// Renew a loan with a caller-supplied due date
#[utoipa::path(
    post,
    path = "/api/library/loans/{loan_id}/renew",
    tag = LIBRARY_TAG,
    params(("loan_id" = i32, Path, description = "Loan ID")),
    request_body = RenewLoanDto,
    responses(
        (status = 200, description = "Loan renewed", body = LoanDto),
        (status = 404, description = "Loan not found", body = ErrorDto),
        (status = 409, description = "Loan is overdue or already returned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn renew_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i32>,
    Json(dto): Json<RenewLoanDto>,
) -> Result<impl IntoResponse, Error> {
    let circulation_service = CirculationService::new(&state.db);

    let loan = circulation_service.renew(loan_id, dto.new_due_date).await?;

    Ok((StatusCode::OK, Json(loan_dto(loan))))
}

/// Return a book, charging any overdue fine
#[utoipa::path(
    post,
    path = "/api/library/loans/{loan_id}/return",
    tag = LIBRARY_TAG,
    params(("loan_id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Book returned", body = LoanDto),
        (status = 404, description = "Loan not found", body = ErrorDto),
        (status = 409, description = "Loan already returned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn return_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let circulation_service = CirculationService::new(&state.db);

    let loan = circulation_service.return_book(loan_id).await?;

    Ok((StatusCode::OK, Json(loan_dto(loan))))
}

/// List a school's overdue loans, oldest due date first
#[utoipa::path(
    get,
    path = "/api/library/loans/overdue",
    tag = LIBRARY_TAG,
    params(SchoolScopeParams),
    responses(
        (status = 200, description = "Overdue loans listed", body = Vec<LoanDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_overdue_loans(
    State(state): State<AppState>,
    Query(params): Query<SchoolScopeParams>,
) -> Result<impl IntoResponse, Error> {
    let circulation_service = CirculationService::new(&state.db);

    let loans = circulation_service.list_overdue(params.school_id).await?;
    let loans: Vec<LoanDto> = loans.into_iter().map(loan_dto).collect();

    Ok((StatusCode::OK, Json(loans)))
}
