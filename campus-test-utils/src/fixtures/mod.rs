//! Fixture helpers that insert prerequisite rows through entity `ActiveModel`s.

pub mod library;
pub mod org;
pub mod study;
pub mod transport;
