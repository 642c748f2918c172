//! API data transfer objects.
//!
//! These are the JSON shapes the REST surface speaks; entity models never cross
//! the controller boundary directly.

pub mod api;
pub mod library;
pub mod org;
pub mod study;
pub mod transport;
