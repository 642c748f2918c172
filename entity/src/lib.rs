//! Database entity definitions for the campus backend.
//!
//! One module per table, written in sea-orm's `DeriveEntityModel` style. Tables that
//! support soft deletion implement [`archive::Archivable`] so every default read path
//! shares a single `deleted_at IS NULL` filter instead of repeating it ad hoc.

pub mod archive;

pub mod book;
pub mod bus;
pub mod bus_location;
pub mod bus_route;
pub mod bus_trip;
pub mod campus_user;
pub mod class_section;
pub mod library_section;
pub mod library_transaction;
pub mod school;
pub mod school_class;
pub mod student;
pub mod student_bus_assignment;
pub mod study_material;
pub mod study_material_section;
pub mod subject;

pub mod prelude {
    pub use crate::archive::Archivable;
    pub use crate::book::Entity as Book;
    pub use crate::bus::Entity as Bus;
    pub use crate::bus_location::Entity as BusLocation;
    pub use crate::bus_route::Entity as BusRoute;
    pub use crate::bus_trip::Entity as BusTrip;
    pub use crate::campus_user::Entity as CampusUser;
    pub use crate::class_section::Entity as ClassSection;
    pub use crate::library_section::Entity as LibrarySection;
    pub use crate::library_transaction::Entity as LibraryTransaction;
    pub use crate::school::Entity as School;
    pub use crate::school_class::Entity as SchoolClass;
    pub use crate::student::Entity as Student;
    pub use crate::student_bus_assignment::Entity as StudentBusAssignment;
    pub use crate::study_material::Entity as StudyMaterial;
    pub use crate::study_material_section::Entity as StudyMaterialSection;
    pub use crate::subject::Entity as Subject;
}
