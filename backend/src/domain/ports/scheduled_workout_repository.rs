//! Port for scheduled workout persistence.
//!
//! Updates are guarded by the workout's `version`: adapters must reject a
//! write whose expected version no longer matches the stored row.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ScheduledWorkout, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by scheduled workout repository adapters.
    pub enum ScheduledWorkoutRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "scheduled workout repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "scheduled workout repository query failed: {message}",
        /// The stored row moved past the version the caller read.
        VersionConflict { workout_id: Uuid, expected: u64 } =>
            "scheduled workout {workout_id} changed concurrently (expected version {expected})",
    }
}

/// Port for writing and reading scheduled workouts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduledWorkoutRepository: Send + Sync {
    /// Insert a newly scheduled workout.
    async fn insert(&self, workout: &ScheduledWorkout)
    -> Result<(), ScheduledWorkoutRepositoryError>;

    /// Replace a stored workout if its version still equals `expected_version`.
    async fn update(
        &self,
        workout: &ScheduledWorkout,
        expected_version: u64,
    ) -> Result<(), ScheduledWorkoutRepositoryError>;

    /// Find a workout by id.
    async fn find_by_id(
        &self,
        workout_id: &Uuid,
    ) -> Result<Option<ScheduledWorkout>, ScheduledWorkoutRepositoryError>;

    /// List a user's workouts ordered by scheduled date and time.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ScheduledWorkout>, ScheduledWorkoutRepositoryError>;
}
