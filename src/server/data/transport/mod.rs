pub mod assignment;
pub mod bus;
pub mod location;
pub mod route;
pub mod trip;
