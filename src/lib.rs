//! Campus: a multi-tenant school operations backend.
//!
//! Covers library circulation, bus fleet tracking, and study material publishing
//! for schools, exposed as a JSON REST API documented with OpenAPI.

pub mod model;
pub mod server;
