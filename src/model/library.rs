use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to add a book to a school's catalogue. Every copy starts available.
#[derive(Deserialize, ToSchema)]
pub struct CreateBookDto {
    pub school_id: i32,
    pub library_section_id: Option<i32>,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub quantity: i32,
}

#[derive(Serialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub school_id: i32,
    pub library_section_id: Option<i32>,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub quantity: i32,
    pub available: i32,
}

impl From<entity::book::Model> for BookDto {
    fn from(book: entity::book::Model) -> Self {
        Self {
            id: book.id,
            school_id: book.school_id,
            library_section_id: book.library_section_id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            quantity: book.quantity,
            available: book.available,
        }
    }
}

/// Request to issue a book to a student.
#[derive(Deserialize, ToSchema)]
pub struct IssueLoanDto {
    pub book_id: i32,
    pub student_id: i32,
}

/// Request to renew a loan. The due date is taken as given; clients typically
/// default it to a week out but the server does not recompute it.
#[derive(Deserialize, ToSchema)]
pub struct RenewLoanDto {
    pub new_due_date: NaiveDateTime,
}

/// Externally visible loan lifecycle state. `Overdue` is derived from the due
/// date at read time and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStateDto {
    Issued,
    Overdue,
    Returned,
}

#[derive(Serialize, ToSchema)]
pub struct LoanDto {
    pub id: i32,
    pub book_id: i32,
    pub student_id: i32,
    pub state: LoanStateDto,
    pub issue_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
    pub fine_amount: Option<Decimal>,
}
