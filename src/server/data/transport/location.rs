use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct LocationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Append one GPS report. Rows are never updated afterwards.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        bus_id: i32,
        bus_trip_id: Option<i32>,
        latitude: Decimal,
        longitude: Decimal,
        speed: Option<f64>,
        heading: Option<f64>,
        accuracy: Option<f64>,
        recorded_at: NaiveDateTime,
    ) -> Result<entity::bus_location::Model, DbErr> {
        let location = entity::bus_location::ActiveModel {
            bus_id: ActiveValue::Set(bus_id),
            bus_trip_id: ActiveValue::Set(bus_trip_id),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            speed: ActiveValue::Set(speed),
            heading: ActiveValue::Set(heading),
            accuracy: ActiveValue::Set(accuracy),
            recorded_at: ActiveValue::Set(recorded_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        location.insert(self.db).await
    }

    /// Latest report for a bus by recorded time
    pub async fn latest_for_bus(
        &self,
        bus_id: i32,
    ) -> Result<Option<entity::bus_location::Model>, DbErr> {
        entity::prelude::BusLocation::find()
            .filter(entity::bus_location::Column::BusId.eq(bus_id))
            .order_by_desc(entity::bus_location::Column::RecordedAt)
            .order_by_desc(entity::bus_location::Column::Id)
            .one(self.db)
            .await
    }

    /// Reports for a bus within `[from, to]`, oldest first
    pub async fn list_for_bus_in_range(
        &self,
        bus_id: i32,
        from: NaiveDateTime,
        to: NaiveDateTime,
        limit: u64,
    ) -> Result<Vec<entity::bus_location::Model>, DbErr> {
        entity::prelude::BusLocation::find()
            .filter(entity::bus_location::Column::BusId.eq(bus_id))
            .filter(entity::bus_location::Column::RecordedAt.gte(from))
            .filter(entity::bus_location::Column::RecordedAt.lte(to))
            .order_by_asc(entity::bus_location::Column::RecordedAt)
            .order_by_asc(entity::bus_location::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Every report tied to a trip, oldest first
    pub async fn list_for_trip(
        &self,
        bus_trip_id: i32,
    ) -> Result<Vec<entity::bus_location::Model>, DbErr> {
        entity::prelude::BusLocation::find()
            .filter(entity::bus_location::Column::BusTripId.eq(bus_trip_id))
            .order_by_asc(entity::bus_location::Column::RecordedAt)
            .order_by_asc(entity::bus_location::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use super::LocationRepository;

    /// Expect the latest lookup to follow recorded time, not insert order
    #[tokio::test]
    async fn latest_follows_recorded_at() -> Result<(), TestError> {
        let test = TestBuilder::new().with_transport_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;

        let repo = LocationRepository::new(&test.db);
        let now = Utc::now().naive_utc();

        let newer = repo
            .create(
                bus.id,
                None,
                Decimal::new(12_520000, 6),
                Decimal::new(77_120000, 6),
                None,
                None,
                None,
                now,
            )
            .await?;
        repo.create(
            bus.id,
            None,
            Decimal::new(12_510000, 6),
            Decimal::new(77_110000, 6),
            None,
            None,
            None,
            now - Duration::minutes(5),
        )
        .await?;

        let latest = repo.latest_for_bus(bus.id).await?.unwrap();
        assert_eq!(latest.id, newer.id);

        Ok(())
    }

    /// Expect the range query to return reports oldest first within bounds
    #[tokio::test]
    async fn range_is_bounded_and_ordered() -> Result<(), TestError> {
        let test = TestBuilder::new().with_transport_tables().build().await?;
        let school = test.org().insert_school("Northside").await?;
        let bus = test.transport().insert_bus(school.id, "KA-01-1234").await?;

        let repo = LocationRepository::new(&test.db);
        let now = Utc::now().naive_utc();

        for minutes in [30, 10, 20, 90] {
            repo.create(
                bus.id,
                None,
                Decimal::new(12_520000, 6),
                Decimal::new(77_120000, 6),
                None,
                None,
                None,
                now - Duration::minutes(minutes),
            )
            .await?;
        }

        let reports = repo
            .list_for_bus_in_range(bus.id, now - Duration::hours(1), now, 100)
            .await?;
        assert_eq!(reports.len(), 3);
        assert!(reports.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));

        Ok(())
    }
}
