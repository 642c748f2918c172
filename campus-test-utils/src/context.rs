use sea_orm::DatabaseConnection;

use crate::fixtures::{
    library::LibraryFixtures, org::OrgFixtures, study::StudyFixtures, transport::TransportFixtures,
};

/// Handle to a built test environment. Create via [`crate::TestBuilder`].
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
}

impl TestContext {
    pub fn org(&self) -> OrgFixtures<'_> {
        OrgFixtures { db: &self.db }
    }

    pub fn library(&self) -> LibraryFixtures<'_> {
        LibraryFixtures { db: &self.db }
    }

    pub fn transport(&self) -> TransportFixtures<'_> {
        TransportFixtures { db: &self.db }
    }

    pub fn study(&self) -> StudyFixtures<'_> {
        StudyFixtures { db: &self.db }
    }

    /// Convert the database handle into any state type the server builds from it,
    /// without this crate depending on the server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}
