use chrono::{NaiveDateTime, Utc};
use entity::library_transaction::LoanStatus;
use entity::prelude::Archivable;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder,
};

pub struct LoanRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Record a freshly issued loan
    pub async fn create_issued(
        &self,
        school_id: i32,
        book_id: i32,
        student_id: i32,
        issue_date: NaiveDateTime,
        due_date: NaiveDateTime,
    ) -> Result<entity::library_transaction::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let loan = entity::library_transaction::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            book_id: ActiveValue::Set(book_id),
            student_id: ActiveValue::Set(student_id),
            status: ActiveValue::Set(LoanStatus::Issued),
            issue_date: ActiveValue::Set(issue_date),
            due_date: ActiveValue::Set(due_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        loan.insert(self.db).await
    }

    /// Get a non-deleted loan by ID
    pub async fn get_by_id(
        &self,
        loan_id: i32,
    ) -> Result<Option<entity::library_transaction::Model>, DbErr> {
        entity::prelude::LibraryTransaction::find_active()
            .filter(entity::library_transaction::Column::Id.eq(loan_id))
            .one(self.db)
            .await
    }

    /// Push a loan's due date out, keeping it in the Issued state
    pub async fn update_due_date(
        &self,
        loan: entity::library_transaction::Model,
        due_date: NaiveDateTime,
    ) -> Result<entity::library_transaction::Model, DbErr> {
        let mut loan: entity::library_transaction::ActiveModel = loan.into();
        loan.due_date = ActiveValue::Set(due_date);
        loan.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        loan.update(self.db).await
    }

    /// Close a loan, recording when it came back and any fine charged
    pub async fn mark_returned(
        &self,
        loan: entity::library_transaction::Model,
        return_date: NaiveDateTime,
        fine_amount: Option<Decimal>,
    ) -> Result<entity::library_transaction::Model, DbErr> {
        let mut loan: entity::library_transaction::ActiveModel = loan.into();
        loan.status = ActiveValue::Set(LoanStatus::Returned);
        loan.return_date = ActiveValue::Set(Some(return_date));
        loan.fine_amount = ActiveValue::Set(fine_amount);
        loan.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        loan.update(self.db).await
    }

    /// List loans still out past the given instant, oldest due date first
    pub async fn list_overdue(
        &self,
        school_id: i32,
        as_of: NaiveDateTime,
    ) -> Result<Vec<entity::library_transaction::Model>, DbErr> {
        entity::prelude::LibraryTransaction::find_active()
            .filter(entity::library_transaction::Column::SchoolId.eq(school_id))
            .filter(entity::library_transaction::Column::Status.eq(LoanStatus::Issued))
            .filter(entity::library_transaction::Column::DueDate.lt(as_of))
            .order_by_asc(entity::library_transaction::Column::DueDate)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};
    use chrono::{Duration, Utc};

    use super::LoanRepository;

    /// Expect the overdue scan to skip returned loans and future due dates
    #[tokio::test]
    async fn list_overdue_only_open_past_due() -> Result<(), TestError> {
        let test = TestBuilder::new().with_library_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let student = test.org().insert_student(school.id).await?;
        let book = test.library().insert_book(school.id, "Dune", 2).await?;

        let repo = LoanRepository::new(&test.db);
        let now = Utc::now().naive_utc();

        let late = repo
            .create_issued(
                school.id,
                book.id,
                student.id,
                now - Duration::days(20),
                now - Duration::days(6),
            )
            .await?;
        let on_time = repo
            .create_issued(school.id, book.id, student.id, now, now + Duration::days(14))
            .await?;
        let returned = repo
            .create_issued(
                school.id,
                book.id,
                student.id,
                now - Duration::days(30),
                now - Duration::days(16),
            )
            .await?;
        repo.mark_returned(returned, now, None).await?;

        let overdue = repo.list_overdue(school.id, now).await?;
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, late.id);
        assert_ne!(overdue[0].id, on_time.id);

        Ok(())
    }
}
