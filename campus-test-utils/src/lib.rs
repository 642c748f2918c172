//! Test support for the campus workspace.
//!
//! Tests run against an in-memory SQLite database with tables generated from the
//! entity definitions via `Schema::create_table_from_entity`. [`TestBuilder`] picks
//! which domain's tables exist; [`TestContext`] hands out fixture helpers that
//! insert prerequisite rows directly through entity `ActiveModel`s.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
