//! Scheduled workout lifecycle.
//!
//! A scheduled workout is a dated instance of a plan. Its `status` moves
//! through a closed state machine:
//!
//! ```text
//! SCHEDULED ──start──▶ IN_PROGRESS ──complete──▶ COMPLETED
//!     │                     │
//!     └──────cancel─────────┴──────────────────▶ CANCELLED
//! ```
//!
//! `COMPLETED` and `CANCELLED` are terminal. Every transition returns a new
//! [`ScheduledWorkout`] value; the receiver is never mutated.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

mod scheduled;
mod status;

pub use scheduled::{CompletionInput, Rating, ScheduledWorkout, ScheduledWorkoutDraft};
pub use status::{EligibleAction, WorkoutAction, WorkoutStatus, eligible_action};

/// Input validation failures for scheduling and lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutValidationError {
    #[error("rating must be between 1 and 5 (got {value})")]
    RatingOutOfRange { value: i64 },
    #[error("calories burned must be a non-negative integer (got {value})")]
    InvalidCalories { value: i64 },
    #[error("actual duration must be a non-negative number of minutes (got {value})")]
    InvalidDuration { value: i64 },
    #[error("scheduled date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("scheduled time is required")]
    MissingTime,
}

/// Failures raised by lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The workout's current status does not allow the requested action.
    #[error("cannot {action} a workout that is {from}")]
    InvalidTransition {
        from: WorkoutStatus,
        action: WorkoutAction,
    },
    /// The transition inputs are out of range.
    #[error(transparent)]
    Validation(#[from] WorkoutValidationError),
}

impl LifecycleError {
    fn invalid(from: WorkoutStatus, action: WorkoutAction) -> Self {
        Self::InvalidTransition { from, action }
    }
}

pub(crate) fn require_time(time: Option<NaiveTime>) -> Result<NaiveTime, WorkoutValidationError> {
    time.ok_or(WorkoutValidationError::MissingTime)
}

pub(crate) fn require_not_past(
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, WorkoutValidationError> {
    if date < today {
        Err(WorkoutValidationError::DateInPast { date, today })
    } else {
        Ok(date)
    }
}
