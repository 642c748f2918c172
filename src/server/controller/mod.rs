//! HTTP controller endpoints for the campus web API.
//!
//! Axum handlers grouped by domain. Controllers decode requests, call the
//! matching service, and translate entity models into the DTOs the API speaks;
//! relational rules live in the services, not here.

pub mod library;
pub mod org;
pub mod study;
pub mod transport;
