//! Exercise log services: appending entries and reading filtered logs.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AppendExerciseRequest, ExerciseLogCommand, ExerciseLogQuery, UserRepository,
};
use crate::domain::user_service::map_user_persistence_error;
use crate::domain::{
    Error, Exercise, ExerciseDate, ExerciseLog, ExerciseReceipt, LogQuery, UserId,
};

fn user_not_found(user_id: &UserId) -> Error {
    Error::not_found(format!("user {user_id} not found"))
}

/// Exercise log service implementing the exercise driving ports.
#[derive(Clone)]
pub struct ExerciseLogService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ExerciseLogService<R> {
    /// Create a new service.
    ///
    /// `clock` supplies the date for exercises submitted without one.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    fn today(&self) -> ExerciseDate {
        ExerciseDate::from_naive(self.clock.utc().date_naive())
    }
}

#[async_trait]
impl<R> ExerciseLogCommand for ExerciseLogService<R>
where
    R: UserRepository,
{
    async fn append_exercise(
        &self,
        request: AppendExerciseRequest,
    ) -> Result<ExerciseReceipt, Error> {
        let AppendExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;
        let date = date.unwrap_or_else(|| self.today());
        let exercise = Exercise::new(description, duration, date);

        let user = self
            .repo
            .append_exercise(&user_id, &exercise)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| user_not_found(&user_id))?;

        info!(user_id = %user.id(), date = %exercise.date, "exercise appended");
        Ok(ExerciseReceipt { user, exercise })
    }
}

#[async_trait]
impl<R> ExerciseLogQuery for ExerciseLogService<R>
where
    R: UserRepository,
{
    async fn exercise_log(
        &self,
        user_id: &UserId,
        query: &LogQuery,
    ) -> Result<ExerciseLog, Error> {
        let record = self
            .repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| user_not_found(user_id))?;

        let log = ExerciseLog::from_record(record, query);
        debug!(
            user_id = %user_id,
            from = query.from_bound(),
            to = query.to_bound(),
            count = log.count(),
            "exercise log read"
        );
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockUserRepository, UserPersistenceError};
    use crate::domain::{
        Description, DurationMinutes, ErrorCode, User, UserRecord, Username,
    };
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    #[fixture]
    fn clock() -> Arc<dyn Clock> {
        let utc_now = Utc
            .with_ymd_and_hms(2023, 1, 15, 23, 59, 0)
            .single()
            .expect("valid fixture timestamp");
        Arc::new(FixtureClock { utc_now })
    }

    #[fixture]
    fn user() -> User {
        User::new(UserId::random(), Username::new("fcc_test").expect("username"))
    }

    fn exercise(description: &str, date: &str) -> Exercise {
        Exercise::new(
            Description::new(description).expect("description"),
            DurationMinutes::new(30).expect("duration"),
            ExerciseDate::parse(date).expect("date"),
        )
    }

    fn request(user_id: UserId, date: Option<&str>) -> AppendExerciseRequest {
        AppendExerciseRequest {
            user_id,
            description: Description::new("test").expect("description"),
            duration: DurationMinutes::new(60).expect("duration"),
            date: date.map(|raw| ExerciseDate::parse(raw).expect("date")),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn append_uses_supplied_date(clock: Arc<dyn Clock>, user: User) {
        let user_id = *user.id();
        let mut repo = MockUserRepository::new();
        repo.expect_append_exercise()
            .withf(|_, exercise| exercise.date.as_ref() == "1990-01-01")
            .times(1)
            .return_once(move |_, _| Ok(Some(user)));

        let service = ExerciseLogService::new(Arc::new(repo), clock);
        let receipt = service
            .append_exercise(request(user_id, Some("1990-01-01")))
            .await
            .expect("exercise appended");

        assert_eq!(receipt.exercise.date.to_day_string(), "Mon Jan 01 1990");
        assert_eq!(receipt.user.id(), &user_id);
    }

    #[rstest]
    #[tokio::test]
    async fn append_defaults_to_clock_date_in_utc(clock: Arc<dyn Clock>, user: User) {
        let user_id = *user.id();
        let mut repo = MockUserRepository::new();
        repo.expect_append_exercise()
            .withf(|_, exercise| exercise.date.as_ref() == "2023-01-15")
            .times(1)
            .return_once(move |_, _| Ok(Some(user)));

        let service = ExerciseLogService::new(Arc::new(repo), clock);
        let receipt = service
            .append_exercise(request(user_id, None))
            .await
            .expect("exercise appended");

        assert_eq!(receipt.exercise.date.to_day_string(), "Sun Jan 15 2023");
    }

    #[rstest]
    #[tokio::test]
    async fn append_reads_the_clock_per_request() {
        let mut clock = mockable::MockClock::new();
        let mut days = vec![15, 16].into_iter();
        clock.expect_utc().times(2).returning(move || {
            let day = days.next().expect("clock call budget");
            Utc.with_ymd_and_hms(2023, 1, day, 12, 0, 0)
                .single()
                .expect("valid timestamp")
        });
        let mut repo = MockUserRepository::new();
        repo.expect_append_exercise()
            .times(2)
            .returning(|id, _| {
                Ok(Some(User::new(*id, Username::new("ada").expect("username"))))
            });

        let service = ExerciseLogService::new(Arc::new(repo), Arc::new(clock));
        let first = service
            .append_exercise(request(UserId::random(), None))
            .await
            .expect("first append");
        let second = service
            .append_exercise(request(UserId::random(), None))
            .await
            .expect("second append");

        assert_eq!(first.exercise.date.as_ref(), "2023-01-15");
        assert_eq!(second.exercise.date.as_ref(), "2023-01-16");
    }

    #[rstest]
    #[tokio::test]
    async fn append_reports_unknown_user(clock: Arc<dyn Clock>) {
        let mut repo = MockUserRepository::new();
        repo.expect_append_exercise()
            .return_once(|_, _| Ok(None));

        let service = ExerciseLogService::new(Arc::new(repo), clock);
        let error = service
            .append_exercise(request(UserId::random(), Some("2023-01-01")))
            .await
            .expect_err("unknown user");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn append_maps_query_failures(clock: Arc<dyn Clock>) {
        let mut repo = MockUserRepository::new();
        repo.expect_append_exercise()
            .return_once(|_, _| Err(UserPersistenceError::query("constraint")));

        let service = ExerciseLogService::new(Arc::new(repo), clock);
        let error = service
            .append_exercise(request(UserId::random(), None))
            .await
            .expect_err("query failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn log_filters_then_limits(clock: Arc<dyn Clock>, user: User) {
        let user_id = *user.id();
        let record = UserRecord {
            user,
            exercises: vec![
                exercise("early", "2022-12-31"),
                exercise("first", "2023-01-01"),
                exercise("second", "2023-01-02"),
                exercise("third", "2023-01-03"),
            ],
        };
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(record)));

        let service = ExerciseLogService::new(Arc::new(repo), clock);
        let query = LogQuery {
            from: Some(ExerciseDate::parse("2023-01-01").expect("date")),
            to: None,
            limit: Some(2),
        };
        let log = service
            .exercise_log(&user_id, &query)
            .await
            .expect("log read");

        let descriptions: Vec<&str> = log
            .entries
            .iter()
            .map(|entry| entry.description.as_ref())
            .collect();
        assert_eq!(descriptions, vec!["first", "second"]);
        assert_eq!(log.count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn log_reports_unknown_user(clock: Arc<dyn Clock>) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let service = ExerciseLogService::new(Arc::new(repo), clock);
        let error = service
            .exercise_log(&UserId::random(), &LogQuery::default())
            .await
            .expect_err("unknown user");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
