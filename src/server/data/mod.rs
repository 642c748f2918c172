//! Data access layer repositories.
//!
//! Repositories are thin wrappers over the entity layer, organized by domain.
//! They are generic over the connection so services can point them at either the
//! shared pool or an open transaction; invariant enforcement that spans several
//! statements lives in the service layer, inside a single transaction.

pub mod library;
pub mod org;
pub mod study;
pub mod transport;
