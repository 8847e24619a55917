//! In-memory [`ScheduledWorkoutRepository`] with a version guard on update.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{ScheduledWorkoutRepository, ScheduledWorkoutRepositoryError};
use crate::domain::{ScheduledWorkout, UserId};

fn poisoned() -> ScheduledWorkoutRepositoryError {
    ScheduledWorkoutRepositoryError::connection("scheduled workout store lock poisoned")
}

/// Scheduled workout store keyed by workout id.
#[derive(Debug, Default)]
pub struct InMemoryScheduledWorkoutRepository {
    store: RwLock<HashMap<Uuid, ScheduledWorkout>>,
}

impl InMemoryScheduledWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduledWorkoutRepository for InMemoryScheduledWorkoutRepository {
    async fn insert(
        &self,
        workout: &ScheduledWorkout,
    ) -> Result<(), ScheduledWorkoutRepositoryError> {
        let mut guard = self.store.write().map_err(|_| poisoned())?;
        if guard.contains_key(&workout.id()) {
            return Err(ScheduledWorkoutRepositoryError::query(format!(
                "scheduled workout {} already exists",
                workout.id()
            )));
        }
        guard.insert(workout.id(), workout.clone());
        Ok(())
    }

    async fn update(
        &self,
        workout: &ScheduledWorkout,
        expected_version: u64,
    ) -> Result<(), ScheduledWorkoutRepositoryError> {
        let mut guard = self.store.write().map_err(|_| poisoned())?;
        let Some(stored) = guard.get_mut(&workout.id()) else {
            return Err(ScheduledWorkoutRepositoryError::query(format!(
                "scheduled workout {} does not exist",
                workout.id()
            )));
        };
        if stored.version() != expected_version {
            return Err(ScheduledWorkoutRepositoryError::version_conflict(
                workout.id(),
                expected_version,
            ));
        }
        *stored = workout.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        workout_id: &Uuid,
    ) -> Result<Option<ScheduledWorkout>, ScheduledWorkoutRepositoryError> {
        let guard = self.store.read().map_err(|_| poisoned())?;
        Ok(guard.get(workout_id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ScheduledWorkout>, ScheduledWorkoutRepositoryError> {
        let guard = self.store.read().map_err(|_| poisoned())?;
        let mut workouts: Vec<ScheduledWorkout> = guard
            .values()
            .filter(|workout| workout.user_id() == user_id)
            .cloned()
            .collect();
        workouts.sort_by_key(|workout| {
            (
                workout.scheduled_date(),
                workout.scheduled_time(),
                workout.id(),
            )
        });
        Ok(workouts)
    }
}
