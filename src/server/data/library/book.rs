use chrono::Utc;
use entity::prelude::Archivable;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct BookRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a book with all copies available
    pub async fn create(
        &self,
        school_id: i32,
        library_section_id: Option<i32>,
        title: String,
        author: Option<String>,
        isbn: Option<String>,
        quantity: i32,
    ) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let book = entity::book::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            library_section_id: ActiveValue::Set(library_section_id),
            title: ActiveValue::Set(title),
            author: ActiveValue::Set(author),
            isbn: ActiveValue::Set(isbn),
            quantity: ActiveValue::Set(quantity),
            available: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        book.insert(self.db).await
    }

    /// Get a non-deleted book by ID
    pub async fn get_by_id(&self, book_id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_active()
            .filter(entity::book::Column::Id.eq(book_id))
            .one(self.db)
            .await
    }

    /// List non-deleted books belonging to a school
    pub async fn list_by_school(
        &self,
        school_id: i32,
    ) -> Result<Vec<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_active()
            .filter(entity::book::Column::SchoolId.eq(school_id))
            .order_by_asc(entity::book::Column::Title)
            .all(self.db)
            .await
    }

    /// Conditionally take one copy off the shelf.
    ///
    /// The decrement only applies while `available > 0`, so two concurrent
    /// issues of the last copy cannot both succeed. Returns whether a copy was
    /// taken.
    pub async fn try_decrement_available(&self, book_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::update_many()
            .col_expr(
                entity::book::Column::Available,
                Expr::col(entity::book::Column::Available).sub(1),
            )
            .col_expr(
                entity::book::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::book::Column::Id.eq(book_id))
            .filter(entity::book::Column::Available.gt(0))
            .filter(entity::book::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Put one copy back on the shelf, guarded so `available` can never exceed
    /// `quantity`. Returns whether the increment applied.
    pub async fn try_increment_available(&self, book_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::update_many()
            .col_expr(
                entity::book::Column::Available,
                Expr::col(entity::book::Column::Available).add(1),
            )
            .col_expr(
                entity::book::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::book::Column::Id.eq(book_id))
            .filter(
                Expr::col(entity::book::Column::Available)
                    .lt(Expr::col(entity::book::Column::Quantity)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};

    use super::BookRepository;

    /// Expect decrement to fail once availability hits zero
    #[tokio::test]
    async fn decrement_stops_at_zero() -> Result<(), TestError> {
        let test = TestBuilder::new().with_library_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let book = test.library().insert_book(school.id, "Dune", 1).await?;

        let repo = BookRepository::new(&test.db);

        assert!(repo.try_decrement_available(book.id).await?);
        assert!(!repo.try_decrement_available(book.id).await?);

        let book = repo.get_by_id(book.id).await?.unwrap();
        assert_eq!(book.available, 0);

        Ok(())
    }

    /// Expect increment to be capped at the owned quantity
    #[tokio::test]
    async fn increment_capped_at_quantity() -> Result<(), TestError> {
        let test = TestBuilder::new().with_library_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let book = test.library().insert_book(school.id, "Dune", 2).await?;

        let repo = BookRepository::new(&test.db);

        assert!(!repo.try_increment_available(book.id).await?);

        let book = repo.get_by_id(book.id).await?.unwrap();
        assert_eq!(book.available, 2);

        Ok(())
    }

    /// Expect create to start with all copies on the shelf
    #[tokio::test]
    async fn create_starts_fully_available() -> Result<(), TestError> {
        let test = TestBuilder::new().with_library_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;

        let repo = BookRepository::new(&test.db);
        let book = repo
            .create(school.id, None, "Dune".to_string(), None, None, 3)
            .await?;

        assert_eq!(book.quantity, 3);
        assert_eq!(book.available, 3);

        Ok(())
    }
}
