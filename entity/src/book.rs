use sea_orm::entity::prelude::*;

/// A loanable title. `available` is the live count of copies on the shelf and must
/// stay within `0..=quantity`; it is only moved by conditional updates inside the
/// circulation service's transactions.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub library_section_id: Option<i32>,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub quantity: i32,
    pub available: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school::Entity",
        from = "Column::SchoolId",
        to = "super::school::Column::Id"
    )]
    School,
    #[sea_orm(
        belongs_to = "super::library_section::Entity",
        from = "Column::LibrarySectionId",
        to = "super::library_section::Column::Id"
    )]
    LibrarySection,
    #[sea_orm(has_many = "super::library_transaction::Entity")]
    LibraryTransaction,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::library_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibrarySection.def()
    }
}

impl Related<super::library_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::archive::Archivable for Entity {
    fn deleted_at_column() -> Self::Column {
        Column::DeletedAt
    }
}
