//! Server-side model types shared across controllers and services.

pub mod app;
