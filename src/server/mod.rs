//! Server application core modules.
//!
//! Contains the backend for the campus application: HTTP routing and controllers,
//! the repository data layer, domain services (library circulation, transport
//! tracking, study material publishing), configuration, and startup wiring.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
