use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_school_table::School,
    m20260815_000007_create_library_section_table::LibrarySection,
};

static IDX_BOOK_SCHOOL_ID: &str = "idx_book_school_id";
static FK_BOOK_SCHOOL_ID: &str = "fk_book_school_id";
static FK_BOOK_LIBRARY_SECTION_ID: &str = "fk_book_library_section_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(integer(Book::SchoolId))
                    .col(integer_null(Book::LibrarySectionId))
                    .col(string(Book::Title))
                    .col(string_null(Book::Author))
                    .col(string_null(Book::Isbn))
                    .col(integer(Book::Quantity))
                    .col(integer(Book::Available))
                    .col(timestamp(Book::CreatedAt))
                    .col(timestamp(Book::UpdatedAt))
                    .col(timestamp_null(Book::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOK_SCHOOL_ID)
                    .table(Book::Table)
                    .col(Book::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOK_SCHOOL_ID)
                    .from_tbl(Book::Table)
                    .from_col(Book::SchoolId)
                    .to_tbl(School::Table)
                    .to_col(School::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOK_LIBRARY_SECTION_ID)
                    .from_tbl(Book::Table)
                    .from_col(Book::LibrarySectionId)
                    .to_tbl(LibrarySection::Table)
                    .to_col(LibrarySection::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOK_LIBRARY_SECTION_ID)
                    .table(Book::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOK_SCHOOL_ID)
                    .table(Book::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOK_SCHOOL_ID)
                    .table(Book::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    SchoolId,
    LibrarySectionId,
    Title,
    Author,
    Isbn,
    Quantity,
    Available,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
