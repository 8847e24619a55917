//! Scheduled workout lifecycle service.
//!
//! Implements [`ScheduledWorkoutCommand`] and [`ScheduledWorkoutQuery`].
//! Every mutation follows the same sequence under the workout's write gate:
//! load, optionally check the caller's expected version, apply the pure
//! transition, then persist guarded by the version that was read.
//!
//! "Today" is the UTC calendar date reported by the injected clock.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::ports::{
    CompleteWorkoutRequest, RescheduleWorkoutRequest, ScheduleWorkoutRequest,
    ScheduledWorkoutCommand, ScheduledWorkoutPayload, ScheduledWorkoutQuery,
    ScheduledWorkoutRepository, ScheduledWorkoutRepositoryError, WorkoutPlanRepository,
    WorkoutTransitionRequest,
};
use crate::domain::workout_plan_service::map_plan_repository_error;
use crate::domain::{
    CompletionInput, EntityLocks, Error, LifecycleError, ScheduledWorkout, ScheduledWorkoutDraft,
    UserId, WorkoutAction, WorkoutValidationError,
};

fn map_workout_repository_error(error: ScheduledWorkoutRepositoryError) -> Error {
    match error {
        ScheduledWorkoutRepositoryError::Connection { message } => {
            error!(%message, "scheduled workout repository unavailable");
            Error::service_unavailable(format!(
                "scheduled workout repository unavailable: {message}"
            ))
        }
        ScheduledWorkoutRepositoryError::Query { message } => {
            error!(%message, "scheduled workout repository query failed");
            Error::internal(format!("scheduled workout repository error: {message}"))
        }
        ScheduledWorkoutRepositoryError::VersionConflict {
            workout_id,
            expected,
        } => Error::conflict(format!("workout {workout_id} was modified concurrently"))
            .with_details(json!({
                "expectedVersion": expected,
                "code": "version_mismatch",
            })),
    }
}

fn map_validation_error(error: WorkoutValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

fn map_lifecycle_error(error: LifecycleError) -> Error {
    let message = error.to_string();
    match error {
        LifecycleError::InvalidTransition { from, action } => {
            Error::conflict(message).with_details(json!({
                "status": from,
                "action": action,
                "code": "invalid_transition",
            }))
        }
        LifecycleError::Validation(inner) => map_validation_error(inner),
    }
}

fn version_conflict(expected: u64, actual: u64) -> Error {
    Error::conflict("version mismatch").with_details(json!({
        "expectedVersion": expected,
        "actualVersion": actual,
        "code": "version_mismatch",
    }))
}

fn workout_not_found(workout_id: Uuid) -> Error {
    Error::not_found(format!("scheduled workout {workout_id} not found"))
}

/// Lifecycle service over scheduled workout and plan repositories.
#[derive(Clone)]
pub struct WorkoutLifecycleService<W, P> {
    workout_repo: Arc<W>,
    plan_repo: Arc<P>,
    clock: Arc<dyn Clock>,
    locks: Arc<EntityLocks>,
}

impl<W, P> WorkoutLifecycleService<W, P> {
    /// Create a service with an empty write-gate registry.
    ///
    /// Share one instance (behind an `Arc`) across request handlers; separate
    /// instances do not serialise against each other.
    pub fn new(workout_repo: Arc<W>, plan_repo: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            workout_repo,
            plan_repo,
            clock,
            locks: Arc::new(EntityLocks::new()),
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

impl<W, P> WorkoutLifecycleService<W, P>
where
    W: ScheduledWorkoutRepository,
    P: WorkoutPlanRepository,
{
    async fn load(&self, workout_id: Uuid) -> Result<ScheduledWorkout, Error> {
        self.workout_repo
            .find_by_id(&workout_id)
            .await
            .map_err(map_workout_repository_error)?
            .ok_or_else(|| workout_not_found(workout_id))
    }

    async fn transition<F>(
        &self,
        workout_id: Uuid,
        expected_version: Option<u64>,
        action: WorkoutAction,
        apply: F,
    ) -> Result<ScheduledWorkoutPayload, Error>
    where
        F: FnOnce(&ScheduledWorkout, DateTime<Utc>) -> Result<ScheduledWorkout, LifecycleError>
            + Send,
    {
        let _gate = self.locks.acquire(workout_id).await;
        let current = self.load(workout_id).await?;

        if let Some(expected) = expected_version.filter(|version| *version != current.version()) {
            debug!(%workout_id, %action, expected, actual = current.version(), "stale version");
            return Err(version_conflict(expected, current.version()));
        }

        let now = self.clock.utc();
        let next = apply(&current, now).map_err(|err| {
            debug!(
                %workout_id,
                %action,
                status = %current.status(),
                error = %err,
                "transition rejected"
            );
            map_lifecycle_error(err)
        })?;

        self.workout_repo
            .update(&next, current.version())
            .await
            .map_err(map_workout_repository_error)?;

        info!(
            %workout_id,
            %action,
            from = %current.status(),
            to = %next.status(),
            version = next.version(),
            "workout transitioned"
        );
        Ok(ScheduledWorkoutPayload::from_workout(&next, now.date_naive()))
    }
}

#[async_trait]
impl<W, P> ScheduledWorkoutCommand for WorkoutLifecycleService<W, P>
where
    W: ScheduledWorkoutRepository,
    P: WorkoutPlanRepository,
{
    async fn schedule(
        &self,
        request: ScheduleWorkoutRequest,
    ) -> Result<ScheduledWorkoutPayload, Error> {
        let plan = self
            .plan_repo
            .find_by_id(&request.plan_id)
            .await
            .map_err(map_plan_repository_error)?
            .ok_or_else(|| Error::not_found(format!("workout plan {} not found", request.plan_id)))?;

        let today = self.today();
        let workout = ScheduledWorkout::schedule(
            ScheduledWorkoutDraft {
                id: Uuid::new_v4(),
                plan_id: plan.id(),
                user_id: plan.user_id().clone(),
                scheduled_date: request.scheduled_date,
                scheduled_time: request.scheduled_time,
            },
            today,
        )
        .map_err(map_validation_error)?;

        self.workout_repo
            .insert(&workout)
            .await
            .map_err(map_workout_repository_error)?;

        info!(
            workout_id = %workout.id(),
            plan_id = %workout.plan_id(),
            scheduled_date = %workout.scheduled_date(),
            "workout scheduled"
        );
        Ok(ScheduledWorkoutPayload::from_workout(&workout, today))
    }

    async fn start(
        &self,
        request: WorkoutTransitionRequest,
    ) -> Result<ScheduledWorkoutPayload, Error> {
        self.transition(
            request.workout_id,
            request.expected_version,
            WorkoutAction::Start,
            |workout, now| workout.start(now),
        )
        .await
    }

    async fn complete(
        &self,
        request: CompleteWorkoutRequest,
    ) -> Result<ScheduledWorkoutPayload, Error> {
        let input = CompletionInput {
            calories_burned: request.calories_burned,
            rating: request.rating,
            actual_duration_minutes: request.actual_duration_minutes,
        };
        self.transition(
            request.workout_id,
            request.expected_version,
            WorkoutAction::Complete,
            move |workout, now| workout.complete(input, now),
        )
        .await
    }

    async fn cancel(
        &self,
        request: WorkoutTransitionRequest,
    ) -> Result<ScheduledWorkoutPayload, Error> {
        self.transition(
            request.workout_id,
            request.expected_version,
            WorkoutAction::Cancel,
            |workout, _| workout.cancel(),
        )
        .await
    }

    async fn reschedule(
        &self,
        request: RescheduleWorkoutRequest,
    ) -> Result<ScheduledWorkoutPayload, Error> {
        self.transition(
            request.workout_id,
            request.expected_version,
            WorkoutAction::Reschedule,
            move |workout, now| {
                workout.reschedule(
                    request.scheduled_date,
                    request.scheduled_time,
                    now.date_naive(),
                )
            },
        )
        .await
    }
}

#[async_trait]
impl<W, P> ScheduledWorkoutQuery for WorkoutLifecycleService<W, P>
where
    W: ScheduledWorkoutRepository,
    P: WorkoutPlanRepository,
{
    async fn get_workout(&self, workout_id: Uuid) -> Result<ScheduledWorkoutPayload, Error> {
        let workout = self.load(workout_id).await?;
        Ok(ScheduledWorkoutPayload::from_workout(&workout, self.today()))
    }

    async fn list_workouts(&self, user_id: UserId) -> Result<Vec<ScheduledWorkoutPayload>, Error> {
        let workouts = self
            .workout_repo
            .list_for_user(&user_id)
            .await
            .map_err(map_workout_repository_error)?;

        let today = self.today();
        Ok(workouts
            .iter()
            .map(|workout| ScheduledWorkoutPayload::from_workout(workout, today))
            .collect())
    }
}

#[cfg(test)]
#[path = "workout_lifecycle_service_tests.rs"]
mod tests;
