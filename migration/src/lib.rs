pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_school_table;
mod m20260815_000002_create_campus_user_table;
mod m20260815_000003_create_school_class_table;
mod m20260815_000004_create_class_section_table;
mod m20260815_000005_create_student_table;
mod m20260815_000006_create_subject_table;
mod m20260815_000007_create_library_section_table;
mod m20260815_000008_create_book_table;
mod m20260815_000009_create_library_transaction_table;
mod m20260815_000010_create_bus_table;
mod m20260815_000011_create_bus_route_table;
mod m20260815_000012_create_bus_trip_table;
mod m20260815_000013_create_bus_location_table;
mod m20260815_000014_create_student_bus_assignment_table;
mod m20260815_000015_create_study_material_section_table;
mod m20260815_000016_create_study_material_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_school_table::Migration),
            Box::new(m20260815_000002_create_campus_user_table::Migration),
            Box::new(m20260815_000003_create_school_class_table::Migration),
            Box::new(m20260815_000004_create_class_section_table::Migration),
            Box::new(m20260815_000005_create_student_table::Migration),
            Box::new(m20260815_000006_create_subject_table::Migration),
            Box::new(m20260815_000007_create_library_section_table::Migration),
            Box::new(m20260815_000008_create_book_table::Migration),
            Box::new(m20260815_000009_create_library_transaction_table::Migration),
            Box::new(m20260815_000010_create_bus_table::Migration),
            Box::new(m20260815_000011_create_bus_route_table::Migration),
            Box::new(m20260815_000012_create_bus_trip_table::Migration),
            Box::new(m20260815_000013_create_bus_location_table::Migration),
            Box::new(m20260815_000014_create_student_bus_assignment_table::Migration),
            Box::new(m20260815_000015_create_study_material_section_table::Migration),
            Box::new(m20260815_000016_create_study_material_table::Migration),
        ]
    }
}
