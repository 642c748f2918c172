use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School, m20260815_000005_create_student_table::Student,
    m20260815_000008_create_book_table::Book,
};

static IDX_LIBRARY_TRANSACTION_STUDENT_ID: &str = "idx_library_transaction_student_id";
static IDX_LIBRARY_TRANSACTION_STATUS_DUE_DATE: &str = "idx_library_transaction_status_due_date";
static FK_LIBRARY_TRANSACTION_SCHOOL_ID: &str = "fk_library_transaction_school_id";
static FK_LIBRARY_TRANSACTION_BOOK_ID: &str = "fk_library_transaction_book_id";
static FK_LIBRARY_TRANSACTION_STUDENT_ID: &str = "fk_library_transaction_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LibraryTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(LibraryTransaction::Id))
                    .col(integer(LibraryTransaction::SchoolId))
                    .col(integer(LibraryTransaction::BookId))
                    .col(integer(LibraryTransaction::StudentId))
                    .col(string_len(LibraryTransaction::Status, 16))
                    .col(timestamp(LibraryTransaction::IssueDate))
                    .col(timestamp(LibraryTransaction::DueDate))
                    .col(timestamp_null(LibraryTransaction::ReturnDate))
                    .col(decimal_len_null(LibraryTransaction::FineAmount, 10, 2))
                    .col(timestamp(LibraryTransaction::CreatedAt))
                    .col(timestamp(LibraryTransaction::UpdatedAt))
                    .col(timestamp_null(LibraryTransaction::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIBRARY_TRANSACTION_STUDENT_ID)
                    .table(LibraryTransaction::Table)
                    .col(LibraryTransaction::StudentId)
                    .to_owned(),
            )
            .await?;

        // Overdue scans filter on status then compare due_date against now.
        manager
            .create_index(
                Index::create()
                    .name(IDX_LIBRARY_TRANSACTION_STATUS_DUE_DATE)
                    .table(LibraryTransaction::Table)
                    .col(LibraryTransaction::Status)
                    .col(LibraryTransaction::DueDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIBRARY_TRANSACTION_SCHOOL_ID)
                    .from_tbl(LibraryTransaction::Table)
                    .from_col(LibraryTransaction::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIBRARY_TRANSACTION_BOOK_ID)
                    .from_tbl(LibraryTransaction::Table)
                    .from_col(LibraryTransaction::BookId)
                    .to_tbl(Book::Table)
                    .to_col(Book::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIBRARY_TRANSACTION_STUDENT_ID)
                    .from_tbl(LibraryTransaction::Table)
                    .from_col(LibraryTransaction::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIBRARY_TRANSACTION_STUDENT_ID)
                    .table(LibraryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIBRARY_TRANSACTION_BOOK_ID)
                    .table(LibraryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIBRARY_TRANSACTION_SCHOOL_ID)
                    .table(LibraryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIBRARY_TRANSACTION_STATUS_DUE_DATE)
                    .table(LibraryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIBRARY_TRANSACTION_STUDENT_ID)
                    .table(LibraryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LibraryTransaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LibraryTransaction {
    Table,
    Id,
    SchoolId,
    BookId,
    StudentId,
    Status,
    IssueDate,
    DueDate,
    ReturnDate,
    FineAmount,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
