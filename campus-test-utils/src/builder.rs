//! Declarative test database setup.
//!
//! Chain `with_*_tables` calls to pick which domains exist in the test database,
//! then `build()` to connect to `sqlite::memory:` and create the schema. Leaving a
//! domain out is how "required table missing" error paths are exercised.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DbBackend, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

#[derive(Default)]
pub struct TestBuilder {
    include_org: bool,
    include_library: bool,
    include_transport: bool,
    include_study: bool,
    extra_tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// School, CampusUser, SchoolClass, ClassSection, Student, Subject.
    pub fn with_org_tables(mut self) -> Self {
        self.include_org = true;
        self
    }

    /// Org tables plus LibrarySection, Book, LibraryTransaction.
    pub fn with_library_tables(mut self) -> Self {
        self.include_org = true;
        self.include_library = true;
        self
    }

    /// Org tables plus Bus, BusRoute, BusTrip, BusLocation, StudentBusAssignment.
    pub fn with_transport_tables(mut self) -> Self {
        self.include_org = true;
        self.include_transport = true;
        self
    }

    /// Org tables plus StudyMaterialSection, StudyMaterial.
    pub fn with_study_tables(mut self) -> Self {
        self.include_org = true;
        self.include_study = true;
        self
    }

    /// Adds a single entity's table, for tests that want a minimal schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.extra_tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let schema = Schema::new(DbBackend::Sqlite);

        let mut stmts: Vec<TableCreateStatement> = Vec::new();

        if self.include_org {
            stmts.push(schema.create_table_from_entity(entity::prelude::School));
            stmts.push(schema.create_table_from_entity(entity::prelude::CampusUser));
            stmts.push(schema.create_table_from_entity(entity::prelude::SchoolClass));
            stmts.push(schema.create_table_from_entity(entity::prelude::ClassSection));
            stmts.push(schema.create_table_from_entity(entity::prelude::Student));
            stmts.push(schema.create_table_from_entity(entity::prelude::Subject));
        }

        if self.include_library {
            stmts.push(schema.create_table_from_entity(entity::prelude::LibrarySection));
            stmts.push(schema.create_table_from_entity(entity::prelude::Book));
            stmts.push(schema.create_table_from_entity(entity::prelude::LibraryTransaction));
        }

        if self.include_transport {
            stmts.push(schema.create_table_from_entity(entity::prelude::Bus));
            stmts.push(schema.create_table_from_entity(entity::prelude::BusRoute));
            stmts.push(schema.create_table_from_entity(entity::prelude::BusTrip));
            stmts.push(schema.create_table_from_entity(entity::prelude::BusLocation));
            stmts.push(schema.create_table_from_entity(entity::prelude::StudentBusAssignment));
        }

        if self.include_study {
            stmts.push(schema.create_table_from_entity(entity::prelude::StudyMaterialSection));
            stmts.push(schema.create_table_from_entity(entity::prelude::StudyMaterial));
        }

        stmts.extend(self.extra_tables);

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(TestContext { db })
    }
}
