//! Domain services. Repositories stay dumb; anything that spans more than one
//! statement or enforces a relational rule happens here, inside a transaction.

pub mod library;
pub mod org;
pub mod study;
pub mod transport;
