pub mod class_section;
