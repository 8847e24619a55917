//! Scheduled workout value object and its transitions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::domain::UserId;

use super::{
    EligibleAction, LifecycleError, WorkoutAction, WorkoutStatus, WorkoutValidationError,
    eligible_action, require_not_past, require_time,
};

/// Input payload for [`ScheduledWorkout::schedule`].
#[derive(Debug, Clone)]
pub struct ScheduledWorkoutDraft {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub user_id: UserId,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: Option<NaiveTime>,
}

/// Post-workout rating on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Validate a raw rating.
    pub fn new(value: i64) -> Result<Self, WorkoutValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (Self::MIN..=Self::MAX).contains(rating))
            .map(Self)
            .ok_or(WorkoutValidationError::RatingOutOfRange { value })
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Outcome reported when completing a workout.
///
/// When `actual_duration_minutes` is absent the duration is derived from
/// the recorded start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionInput {
    pub calories_burned: Option<i64>,
    pub rating: i64,
    pub actual_duration_minutes: Option<i64>,
}

/// A dated instance of a workout plan.
///
/// ## Invariants
/// - `rating`, `calories_burned` and `completed_at` are only set once the
///   workout is [`WorkoutStatus::Completed`].
/// - `version` increases by one with every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledWorkout {
    id: Uuid,
    plan_id: Uuid,
    user_id: UserId,
    scheduled_date: NaiveDate,
    scheduled_time: NaiveTime,
    status: WorkoutStatus,
    actual_duration_minutes: Option<u32>,
    calories_burned: Option<u32>,
    rating: Option<Rating>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    version: u64,
}

impl ScheduledWorkout {
    /// Create a workout in [`WorkoutStatus::Scheduled`].
    ///
    /// Fails when the time is missing or the date precedes `today`.
    pub fn schedule(
        draft: ScheduledWorkoutDraft,
        today: NaiveDate,
    ) -> Result<Self, WorkoutValidationError> {
        let scheduled_time = require_time(draft.scheduled_time)?;
        let scheduled_date = require_not_past(draft.scheduled_date, today)?;

        Ok(Self {
            id: draft.id,
            plan_id: draft.plan_id,
            user_id: draft.user_id,
            scheduled_date,
            scheduled_time,
            status: WorkoutStatus::Scheduled,
            actual_duration_minutes: None,
            calories_burned: None,
            rating: None,
            started_at: None,
            completed_at: None,
            version: 0,
        })
    }

    /// `SCHEDULED → IN_PROGRESS`, recording the start timestamp.
    pub fn start(&self, now: DateTime<Utc>) -> Result<Self, LifecycleError> {
        if self.status != WorkoutStatus::Scheduled {
            return Err(LifecycleError::invalid(self.status, WorkoutAction::Start));
        }

        Ok(Self {
            status: WorkoutStatus::InProgress,
            started_at: Some(now),
            ..self.next_version()
        })
    }

    /// `IN_PROGRESS → COMPLETED`, recording rating and effort.
    ///
    /// The status check runs before input validation, so completing a
    /// workout in any other status is a transition failure even when the
    /// rating is also out of range.
    pub fn complete(
        &self,
        input: CompletionInput,
        now: DateTime<Utc>,
    ) -> Result<Self, LifecycleError> {
        if self.status != WorkoutStatus::InProgress {
            return Err(LifecycleError::invalid(self.status, WorkoutAction::Complete));
        }

        let rating = Rating::new(input.rating)?;
        let calories_burned = input
            .calories_burned
            .map(|value| {
                u32::try_from(value).map_err(|_| WorkoutValidationError::InvalidCalories { value })
            })
            .transpose()?;
        let actual_duration_minutes = match input.actual_duration_minutes {
            Some(value) => Some(
                u32::try_from(value)
                    .map_err(|_| WorkoutValidationError::InvalidDuration { value })?,
            ),
            None => self.elapsed_minutes(now),
        };

        Ok(Self {
            status: WorkoutStatus::Completed,
            rating: Some(rating),
            calories_burned,
            actual_duration_minutes,
            completed_at: Some(now),
            ..self.next_version()
        })
    }

    /// `SCHEDULED | IN_PROGRESS → CANCELLED`.
    pub fn cancel(&self) -> Result<Self, LifecycleError> {
        if self.status.is_terminal() {
            return Err(LifecycleError::invalid(self.status, WorkoutAction::Cancel));
        }

        Ok(Self {
            status: WorkoutStatus::Cancelled,
            ..self.next_version()
        })
    }

    /// Move a scheduled workout to a new date and time.
    ///
    /// Only `Scheduled` workouts move; the status stays `Scheduled`.
    pub fn reschedule(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
        today: NaiveDate,
    ) -> Result<Self, LifecycleError> {
        if self.status != WorkoutStatus::Scheduled {
            return Err(LifecycleError::invalid(
                self.status,
                WorkoutAction::Reschedule,
            ));
        }

        let scheduled_time = require_time(time)?;
        let scheduled_date = require_not_past(date, today)?;

        Ok(Self {
            scheduled_date,
            scheduled_time,
            ..self.next_version()
        })
    }

    /// Whether the workout is dated `day`.
    pub fn is_scheduled_for(&self, day: NaiveDate) -> bool {
        self.scheduled_date == day
    }

    /// See [`eligible_action`].
    pub fn eligible_action(&self, today: NaiveDate) -> EligibleAction {
        eligible_action(self, today)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Referenced plan; the plan itself is owned by the catalog.
    pub fn plan_id(&self) -> Uuid {
        self.plan_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn scheduled_date(&self) -> NaiveDate {
        self.scheduled_date
    }

    pub fn scheduled_time(&self) -> NaiveTime {
        self.scheduled_time
    }

    pub fn status(&self) -> WorkoutStatus {
        self.status
    }

    pub fn actual_duration_minutes(&self) -> Option<u32> {
        self.actual_duration_minutes
    }

    pub fn calories_burned(&self) -> Option<u32> {
        self.calories_burned
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Optimistic concurrency token.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn next_version(&self) -> Self {
        Self {
            version: self.version.saturating_add(1),
            ..self.clone()
        }
    }

    fn elapsed_minutes(&self, now: DateTime<Utc>) -> Option<u32> {
        self.started_at
            .and_then(|started_at| u32::try_from((now - started_at).num_minutes().max(0)).ok())
    }
}
