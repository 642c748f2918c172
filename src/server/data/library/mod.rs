pub mod book;
pub mod section;
pub mod transaction;
