//! Driving port for scheduled workout reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, UserId};

use super::ScheduledWorkoutPayload;

/// Driving port for scheduled workout read operations.
///
/// Reads return snapshots and never wait on in-flight transitions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduledWorkoutQuery: Send + Sync {
    /// Read one workout; unknown ids fail with `NotFound`.
    async fn get_workout(&self, workout_id: Uuid) -> Result<ScheduledWorkoutPayload, Error>;

    /// List a user's workouts ordered by date and time.
    async fn list_workouts(&self, user_id: UserId) -> Result<Vec<ScheduledWorkoutPayload>, Error>;
}
