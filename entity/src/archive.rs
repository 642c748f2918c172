//! Soft deletion as a capability.
//!
//! Archivable tables keep a nullable `deleted_at` timestamp instead of physically
//! removing rows, preserving referential history for audits and historical joins.
//! [`Archivable::find_active`] is the one place the exclusion filter lives; query
//! sites use it instead of remembering to add `deleted_at IS NULL` themselves.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select};

/// Implemented by entities whose rows are archived rather than destroyed.
pub trait Archivable: EntityTrait {
    /// The entity's `deleted_at` column.
    fn deleted_at_column() -> Self::Column;

    /// `find()` restricted to rows that have not been soft-deleted.
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::deleted_at_column().is_null())
    }
}
