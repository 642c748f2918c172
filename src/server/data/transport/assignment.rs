use chrono::{NaiveTime, Utc};
use entity::prelude::Archivable;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

pub struct AssignmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create an active assignment. The single-active-per-student rule is checked
    /// by the service inside the same transaction.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_active(
        &self,
        school_id: i32,
        student_id: i32,
        bus_id: i32,
        bus_route_id: Option<i32>,
        stop_name: Option<String>,
        pickup_time: Option<NaiveTime>,
        dropoff_time: Option<NaiveTime>,
    ) -> Result<entity::student_bus_assignment::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let assignment = entity::student_bus_assignment::ActiveModel {
            school_id: ActiveValue::Set(school_id),
            student_id: ActiveValue::Set(student_id),
            bus_id: ActiveValue::Set(bus_id),
            bus_route_id: ActiveValue::Set(bus_route_id),
            stop_name: ActiveValue::Set(stop_name),
            pickup_time: ActiveValue::Set(pickup_time),
            dropoff_time: ActiveValue::Set(dropoff_time),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    /// Find a student's active, non-deleted assignment if one exists
    pub async fn find_active_by_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student_bus_assignment::Model>, DbErr> {
        entity::prelude::StudentBusAssignment::find_active()
            .filter(entity::student_bus_assignment::Column::StudentId.eq(student_id))
            .filter(entity::student_bus_assignment::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// List active riders of a bus
    pub async fn list_active_by_bus(
        &self,
        bus_id: i32,
    ) -> Result<Vec<entity::student_bus_assignment::Model>, DbErr> {
        entity::prelude::StudentBusAssignment::find_active()
            .filter(entity::student_bus_assignment::Column::BusId.eq(bus_id))
            .filter(entity::student_bus_assignment::Column::IsActive.eq(true))
            .all(self.db)
            .await
    }

    /// Deactivate an assignment, keeping the row for history
    pub async fn deactivate(
        &self,
        assignment: entity::student_bus_assignment::Model,
    ) -> Result<entity::student_bus_assignment::Model, DbErr> {
        let mut assignment: entity::student_bus_assignment::ActiveModel = assignment.into();
        assignment.is_active = ActiveValue::Set(false);
        assignment.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        assignment.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};

    use super::AssignmentRepository;

    /// Expect the active lookup to miss after deactivation
    #[tokio::test]
    async fn deactivated_assignment_not_found_as_active() -> Result<(), TestError> {
        let test = TestBuilder::new().with_transport_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let student = test.org().insert_student(school.id).await?;
        let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;

        let repo = AssignmentRepository::new(&test.db);
        let assignment = repo
            .create_active(school.id, student.id, bus.id, None, None, None, None)
            .await?;

        let found = repo.find_active_by_student(student.id).await?;
        assert!(found.is_some());

        repo.deactivate(assignment).await?;

        let found = repo.find_active_by_student(student.id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
