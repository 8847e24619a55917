//! Workout status enumeration and the per-card action rule.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ScheduledWorkout;

/// Lifecycle status of a scheduled workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutStatus {
    /// Initial state after scheduling.
    Scheduled,
    /// Started and not yet finished.
    InProgress,
    /// Finished; terminal.
    Completed,
    /// Abandoned; terminal.
    Cancelled,
}

impl WorkoutStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Whether no further transitions are possible.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Stable wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Action available for a workout in this status.
    ///
    /// Only workouts dated today offer an action.
    pub const fn eligible_action(self, scheduled_today: bool) -> EligibleAction {
        match (self, scheduled_today) {
            (Self::Scheduled, true) => EligibleAction::Start,
            (Self::InProgress, true) => EligibleAction::Complete,
            _ => EligibleAction::None,
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle operations, used to describe rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutAction {
    Start,
    Complete,
    Cancel,
    Reschedule,
}

impl fmt::Display for WorkoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
            Self::Reschedule => "reschedule",
        };
        f.write_str(label)
    }
}

/// The single UI-facing action legally available for a workout today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibleAction {
    Start,
    Complete,
    None,
}

/// Derive the eligible action for `workout` relative to `today`.
///
/// Pure function of the status and whether the scheduled date equals
/// `today`; never fails.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use uuid::Uuid;
/// use workouts_backend::domain::{
///     EligibleAction, ScheduledWorkout, ScheduledWorkoutDraft, UserId, eligible_action,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
/// let workout = ScheduledWorkout::schedule(
///     ScheduledWorkoutDraft {
///         id: Uuid::new_v4(),
///         plan_id: Uuid::new_v4(),
///         user_id: UserId::random(),
///         scheduled_date: today,
///         scheduled_time: NaiveTime::from_hms_opt(7, 30, 0),
///     },
///     today,
/// )
/// .expect("valid schedule");
/// assert_eq!(eligible_action(&workout, today), EligibleAction::Start);
/// ```
pub fn eligible_action(workout: &ScheduledWorkout, today: NaiveDate) -> EligibleAction {
    workout
        .status()
        .eligible_action(workout.scheduled_date() == today)
}
