pub mod class_section;
pub mod school_class;
pub mod student;
pub mod subject;
