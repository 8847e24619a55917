//! Driving port for scheduling and lifecycle transitions.
//!
//! Every operation returns the workout as it stands after the transition,
//! including the derived `eligible_action` for the service's current date.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{EligibleAction, Error, ScheduledWorkout, UserId, WorkoutStatus};

/// Serializable snapshot of a scheduled workout with derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkoutPayload {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub user_id: UserId,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub status: WorkoutStatus,
    pub actual_duration_minutes: Option<u32>,
    pub calories_burned: Option<u32>,
    pub rating: Option<u8>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub version: u64,
    pub is_today: bool,
    pub eligible_action: EligibleAction,
}

impl ScheduledWorkoutPayload {
    /// Snapshot `workout`, deriving date-relative fields against `today`.
    pub fn from_workout(workout: &ScheduledWorkout, today: NaiveDate) -> Self {
        Self {
            id: workout.id(),
            plan_id: workout.plan_id(),
            user_id: workout.user_id().clone(),
            scheduled_date: workout.scheduled_date(),
            scheduled_time: workout.scheduled_time(),
            status: workout.status(),
            actual_duration_minutes: workout.actual_duration_minutes(),
            calories_burned: workout.calories_burned(),
            rating: workout.rating().map(|rating| rating.value()),
            started_at: workout.started_at(),
            completed_at: workout.completed_at(),
            version: workout.version(),
            is_today: workout.is_scheduled_for(today),
            eligible_action: workout.eligible_action(today),
        }
    }
}

/// Request to schedule a plan for a date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWorkoutRequest {
    pub plan_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: Option<NaiveTime>,
}

/// Request for a transition that carries no input besides the target.
///
/// When `expected_version` is set the transition only applies if the stored
/// workout is still at that version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTransitionRequest {
    pub workout_id: Uuid,
    pub expected_version: Option<u64>,
}

impl WorkoutTransitionRequest {
    /// Unconditional transition of `workout_id`.
    pub fn new(workout_id: Uuid) -> Self {
        Self {
            workout_id,
            expected_version: None,
        }
    }
}

/// Request to complete an in-progress workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteWorkoutRequest {
    pub workout_id: Uuid,
    pub expected_version: Option<u64>,
    pub calories_burned: Option<i64>,
    pub rating: i64,
    pub actual_duration_minutes: Option<i64>,
}

/// Request to move a workout to a new date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescheduleWorkoutRequest {
    pub workout_id: Uuid,
    pub expected_version: Option<u64>,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: Option<NaiveTime>,
}

/// Driving port for scheduled workout write operations.
///
/// Failures map to `InvalidRequest` (bad input), `Conflict` (illegal
/// transition for the current status, or a stale `expected_version`) and
/// `NotFound` (unknown id).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduledWorkoutCommand: Send + Sync {
    /// Create a `SCHEDULED` workout for an existing plan.
    async fn schedule(
        &self,
        request: ScheduleWorkoutRequest,
    ) -> Result<ScheduledWorkoutPayload, Error>;

    /// `SCHEDULED → IN_PROGRESS`.
    async fn start(
        &self,
        request: WorkoutTransitionRequest,
    ) -> Result<ScheduledWorkoutPayload, Error>;

    /// `IN_PROGRESS → COMPLETED`.
    async fn complete(
        &self,
        request: CompleteWorkoutRequest,
    ) -> Result<ScheduledWorkoutPayload, Error>;

    /// `SCHEDULED | IN_PROGRESS → CANCELLED`.
    async fn cancel(
        &self,
        request: WorkoutTransitionRequest,
    ) -> Result<ScheduledWorkoutPayload, Error>;

    /// Change the date and time of a `SCHEDULED` workout.
    async fn reschedule(
        &self,
        request: RescheduleWorkoutRequest,
    ) -> Result<ScheduledWorkoutPayload, Error>;
}
