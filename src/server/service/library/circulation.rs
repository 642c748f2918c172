use chrono::{Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::warn;

use crate::server::{
    data::{
        library::{book::BookRepository, transaction::LoanRepository},
        org::student::StudentRepository,
    },
    error::Error,
};

/// Lending rules applied when issuing and returning books.
#[derive(Clone, Copy, Debug)]
pub struct LoanPolicy {
    pub loan_period_days: i64,
    pub fine_per_day: Decimal,
    pub fine_cap: Decimal,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            fine_per_day: Decimal::new(500, 2),
            fine_cap: Decimal::new(50000, 2),
        }
    }
}

/// Lifecycle state of a loan as seen by callers. Overdue is never stored; it is
/// derived from the due date every time a loan is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanState {
    Issued,
    Overdue,
    Returned,
}

pub struct CirculationService<'a> {
    db: &'a DatabaseConnection,
    policy: LoanPolicy,
}

impl<'a> CirculationService<'a> {
    /// Creates a new instance of [`CirculationService`] with the default policy
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            policy: LoanPolicy::default(),
        }
    }

    pub fn with_policy(db: &'a DatabaseConnection, policy: LoanPolicy) -> Self {
        Self { db, policy }
    }

    /// Derive the externally visible state of a loan at the given instant
    pub fn state_of(loan: &entity::library_transaction::Model, as_of: NaiveDateTime) -> LoanState {
        match loan.status {
            entity::library_transaction::LoanStatus::Returned => LoanState::Returned,
            entity::library_transaction::LoanStatus::Issued if loan.due_date < as_of => {
                LoanState::Overdue
            }
            entity::library_transaction::LoanStatus::Issued => LoanState::Issued,
        }
    }

    /// Issue a book to a student.
    ///
    /// Takes one copy off the shelf and opens a loan due `loan_period_days` from
    /// now, all in one transaction so the availability counter and the loan row
    /// cannot diverge. Fails with [`Error::OutOfStock`] when no copy is left.
    pub async fn issue(
        &self,
        book_id: i32,
        student_id: i32,
    ) -> Result<entity::library_transaction::Model, Error> {
        let txn = self.db.begin().await?;

        let book_repo = BookRepository::new(&txn);
        let loan_repo = LoanRepository::new(&txn);
        let student_repo = StudentRepository::new(&txn);

        let student = student_repo
            .get_by_id(student_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Student",
                id: student_id,
            })?;

        let book = book_repo.get_by_id(book_id).await?.ok_or(Error::NotFound {
            entity: "Book",
            id: book_id,
        })?;

        if student.school_id != book.school_id {
            return Err(Error::Validation(
                "Student and book belong to different schools".to_string(),
            ));
        }

        if !book_repo.try_decrement_available(book_id).await? {
            return Err(Error::OutOfStock(book_id));
        }

        let now = Utc::now().naive_utc();
        let due_date = now + Duration::days(self.policy.loan_period_days);

        let loan = loan_repo
            .create_issued(book.school_id, book_id, student_id, now, due_date)
            .await?;

        txn.commit().await?;

        Ok(loan)
    }

    /// Renew a loan with a caller-supplied due date, stored as given.
    ///
    /// Only a loan that is still Issued and not yet overdue can be renewed; an
    /// overdue loan has to come back and settle its fine first.
    pub async fn renew(
        &self,
        loan_id: i32,
        new_due_date: NaiveDateTime,
    ) -> Result<entity::library_transaction::Model, Error> {
        let txn = self.db.begin().await?;
        let loan_repo = LoanRepository::new(&txn);

        let loan = loan_repo.get_by_id(loan_id).await?.ok_or(Error::NotFound {
            entity: "Loan",
            id: loan_id,
        })?;

        let now = Utc::now().naive_utc();
        match Self::state_of(&loan, now) {
            LoanState::Issued => {}
            LoanState::Overdue => {
                return Err(Error::InvalidState(
                    "Overdue loans must be returned, not renewed".to_string(),
                ));
            }
            LoanState::Returned => {
                return Err(Error::InvalidState(
                    "Returned loans cannot be renewed".to_string(),
                ));
            }
        }

        let loan = loan_repo.update_due_date(loan, new_due_date).await?;

        txn.commit().await?;

        Ok(loan)
    }

    /// Return a book.
    ///
    /// Closes the loan, charges a fine for every day past due (capped by the
    /// policy), and puts the copy back on the shelf.
    pub async fn return_book(
        &self,
        loan_id: i32,
    ) -> Result<entity::library_transaction::Model, Error> {
        let txn = self.db.begin().await?;
        let loan_repo = LoanRepository::new(&txn);
        let book_repo = BookRepository::new(&txn);

        let loan = loan_repo.get_by_id(loan_id).await?.ok_or(Error::NotFound {
            entity: "Loan",
            id: loan_id,
        })?;

        if loan.status == entity::library_transaction::LoanStatus::Returned {
            return Err(Error::InvalidState(
                "Loan has already been returned".to_string(),
            ));
        }

        let now = Utc::now().naive_utc();
        let fine = self.fine_for(&loan, now);

        let book_id = loan.book_id;
        let loan = loan_repo.mark_returned(loan, now, fine).await?;

        if !book_repo.try_increment_available(book_id).await? {
            // Counter already at quantity, which means it drifted somewhere else.
            warn!("Availability for book {} already at capacity on return", book_id);
        }

        txn.commit().await?;

        Ok(loan)
    }

    /// List every loan of a school that is overdue right now, oldest first
    pub async fn list_overdue(
        &self,
        school_id: i32,
    ) -> Result<Vec<entity::library_transaction::Model>, Error> {
        let loan_repo = LoanRepository::new(self.db);
        let now = Utc::now().naive_utc();

        Ok(loan_repo.list_overdue(school_id, now).await?)
    }

    /// Get a loan by ID
    pub async fn get_loan(
        &self,
        loan_id: i32,
    ) -> Result<entity::library_transaction::Model, Error> {
        let loan_repo = LoanRepository::new(self.db);

        loan_repo.get_by_id(loan_id).await?.ok_or(Error::NotFound {
            entity: "Loan",
            id: loan_id,
        })
    }

    /// Fine owed if the loan were returned at `as_of`. None when on time.
    fn fine_for(
        &self,
        loan: &entity::library_transaction::Model,
        as_of: NaiveDateTime,
    ) -> Option<Decimal> {
        let days_late = (as_of.date() - loan.due_date.date()).num_days();
        if days_late <= 0 {
            return None;
        }

        let fine = Decimal::from(days_late) * self.policy.fine_per_day;
        Some(fine.min(self.policy.fine_cap))
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};

    use super::*;

    mod issue {
        use super::*;

        /// Expect issuing to decrement availability and open an Issued loan
        #[tokio::test]
        async fn issues_and_decrements_availability() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 2).await?;

            let service = CirculationService::new(&test.db);
            let loan = service.issue(book.id, student.id).await.unwrap();

            assert_eq!(
                loan.status,
                entity::library_transaction::LoanStatus::Issued
            );
            assert_eq!(
                loan.due_date.date(),
                (loan.issue_date + chrono::Duration::days(14)).date()
            );

            let book = BookRepository::new(&test.db)
                .get_by_id(book.id)
                .await?
                .unwrap();
            assert_eq!(book.available, 1);

            Ok(())
        }

        /// Expect the due date to follow the configured loan period
        #[tokio::test]
        async fn honors_custom_loan_period() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let policy = LoanPolicy {
                loan_period_days: 7,
                ..LoanPolicy::default()
            };
            let service = CirculationService::with_policy(&test.db, policy);
            let loan = service.issue(book.id, student.id).await.unwrap();

            assert_eq!(
                loan.due_date.date(),
                (loan.issue_date + chrono::Duration::days(7)).date()
            );

            Ok(())
        }

        /// Expect OutOfStock when no copy is available
        #[tokio::test]
        async fn rejects_when_out_of_stock() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test
                .library()
                .insert_book_with_availability(school.id, "Dune", 1, 0)
                .await?;

            let service = CirculationService::new(&test.db);
            let result = service.issue(book.id, student.id).await;

            assert!(matches!(result, Err(Error::OutOfStock(_))));

            Ok(())
        }

        /// Expect NotFound for an unknown student
        #[tokio::test]
        async fn rejects_unknown_student() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let service = CirculationService::new(&test.db);
            let result = service.issue(book.id, 999).await;

            assert!(matches!(result, Err(Error::NotFound { .. })));

            Ok(())
        }

        /// Expect Validation when the student belongs to another school
        #[tokio::test]
        async fn rejects_cross_school_issue() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school_a = test.org().insert_school("Northside").await?;
            let school_b = test.org().insert_school("Southside").await?;
            let student = test.org().insert_student(school_b.id).await?;
            let book = test.library().insert_book(school_a.id, "Dune", 1).await?;

            let service = CirculationService::new(&test.db);
            let result = service.issue(book.id, student.id).await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }

    mod renew {
        use super::*;

        /// Expect renewing an on-time loan to move the due date
        #[tokio::test]
        async fn renews_on_time_loan() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let service = CirculationService::new(&test.db);
            let loan = service.issue(book.id, student.id).await.unwrap();

            let new_due = loan.due_date + chrono::Duration::days(7);
            let loan = service.renew(loan.id, new_due).await.unwrap();

            assert_eq!(loan.due_date, new_due);

            Ok(())
        }

        /// Expect InvalidState when renewing an overdue loan
        #[tokio::test]
        async fn rejects_overdue_loan() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let now = Utc::now().naive_utc();
            let loan = LoanRepository::new(&test.db)
                .create_issued(
                    school.id,
                    book.id,
                    student.id,
                    now - chrono::Duration::days(20),
                    now - chrono::Duration::days(6),
                )
                .await?;

            let service = CirculationService::new(&test.db);
            let result = service.renew(loan.id, now + chrono::Duration::days(7)).await;

            assert!(matches!(result, Err(Error::InvalidState(_))));

            Ok(())
        }

        /// Expect the caller-supplied date to be stored as given, even when it
        /// shortens the loan
        #[tokio::test]
        async fn stores_due_date_as_given() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let service = CirculationService::new(&test.db);
            let loan = service.issue(book.id, student.id).await.unwrap();

            let new_due = loan.due_date - chrono::Duration::days(1);
            let loan = service.renew(loan.id, new_due).await.unwrap();

            assert_eq!(loan.due_date, new_due);
            assert_eq!(
                loan.status,
                entity::library_transaction::LoanStatus::Issued
            );

            Ok(())
        }
    }

    mod return_book {
        use super::*;

        /// Expect an on-time return to close the loan with no fine
        #[tokio::test]
        async fn on_time_return_has_no_fine() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let service = CirculationService::new(&test.db);
            let loan = service.issue(book.id, student.id).await.unwrap();
            let loan = service.return_book(loan.id).await.unwrap();

            assert_eq!(
                loan.status,
                entity::library_transaction::LoanStatus::Returned
            );
            assert!(loan.fine_amount.is_none());

            let book = BookRepository::new(&test.db)
                .get_by_id(book.id)
                .await?
                .unwrap();
            assert_eq!(book.available, 1);

            Ok(())
        }

        /// Expect a late return to charge per day late
        #[tokio::test]
        async fn late_return_charges_fine() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test
                .library()
                .insert_book_with_availability(school.id, "Dune", 1, 0)
                .await?;

            let now = Utc::now().naive_utc();
            let loan = LoanRepository::new(&test.db)
                .create_issued(
                    school.id,
                    book.id,
                    student.id,
                    now - chrono::Duration::days(17),
                    now - chrono::Duration::days(3),
                )
                .await?;

            let service = CirculationService::new(&test.db);
            let loan = service.return_book(loan.id).await.unwrap();

            assert_eq!(loan.fine_amount, Some(Decimal::new(1500, 2)));

            Ok(())
        }

        /// Expect the fine to stop growing at the policy cap
        #[tokio::test]
        async fn fine_is_capped() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test
                .library()
                .insert_book_with_availability(school.id, "Dune", 1, 0)
                .await?;

            let now = Utc::now().naive_utc();
            let loan = LoanRepository::new(&test.db)
                .create_issued(
                    school.id,
                    book.id,
                    student.id,
                    now - chrono::Duration::days(400),
                    now - chrono::Duration::days(365),
                )
                .await?;

            let service = CirculationService::new(&test.db);
            let loan = service.return_book(loan.id).await.unwrap();

            assert_eq!(loan.fine_amount, Some(Decimal::new(50000, 2)));

            Ok(())
        }

        /// Expect InvalidState when returning twice
        #[tokio::test]
        async fn rejects_double_return() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let service = CirculationService::new(&test.db);
            let loan = service.issue(book.id, student.id).await.unwrap();
            service.return_book(loan.id).await.unwrap();

            let result = service.return_book(loan.id).await;
            assert!(matches!(result, Err(Error::InvalidState(_))));

            Ok(())
        }
    }

    mod state_of {
        use super::*;
        use chrono::Duration;

        /// Expect an open loan past due to read as Overdue without a write
        #[tokio::test]
        async fn overdue_is_derived() -> Result<(), TestError> {
            let test = TestBuilder::new().with_library_tables().build().await?;
            let school = test.org().insert_school("Northside").await?;
            let student = test.org().insert_student(school.id).await?;
            let book = test.library().insert_book(school.id, "Dune", 1).await?;

            let now = Utc::now().naive_utc();
            let loan = LoanRepository::new(&test.db)
                .create_issued(
                    school.id,
                    book.id,
                    student.id,
                    now - Duration::days(15),
                    now - Duration::days(1),
                )
                .await?;

            assert_eq!(
                loan.status,
                entity::library_transaction::LoanStatus::Issued
            );
            assert_eq!(
                CirculationService::state_of(&loan, now),
                LoanState::Overdue
            );
            assert_eq!(
                CirculationService::state_of(&loan, now - Duration::days(2)),
                LoanState::Issued
            );

            Ok(())
        }
    }
}
