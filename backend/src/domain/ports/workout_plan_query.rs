//! Driving port for workout plan reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, PlanExercise, UserId, WorkoutPlan};

/// Serializable exercise entry of a stored plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercisePayload {
    pub exercise_id: Uuid,
    pub order_index: u32,
    pub target_sets: Option<u32>,
    pub target_reps_min: Option<u32>,
    pub target_reps_max: Option<u32>,
    pub target_weight_kg: Option<f64>,
    pub target_duration_seconds: Option<u32>,
    pub rest_time_seconds: u32,
    pub notes: Option<String>,
}

/// Serializable stored plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanPayload {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<u32>,
    pub difficulty_level: u8,
    pub goals: Option<String>,
    pub exercises: Vec<PlanExercisePayload>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PlanExercise> for PlanExercisePayload {
    fn from(value: &PlanExercise) -> Self {
        Self {
            exercise_id: value.exercise_id(),
            order_index: value.order_index(),
            target_sets: value.target_sets(),
            target_reps_min: value.target_reps_min(),
            target_reps_max: value.target_reps_max(),
            target_weight_kg: value.target_weight_kg(),
            target_duration_seconds: value.target_duration_seconds(),
            rest_time_seconds: value.rest_time_seconds(),
            notes: value.notes().map(str::to_owned),
        }
    }
}

impl From<&WorkoutPlan> for WorkoutPlanPayload {
    fn from(value: &WorkoutPlan) -> Self {
        Self {
            id: value.id(),
            user_id: value.user_id().clone(),
            name: value.name().to_owned(),
            description: value.description().map(str::to_owned),
            estimated_duration_minutes: value.estimated_duration_minutes(),
            difficulty_level: value.difficulty_level().value(),
            goals: value.goals().map(str::to_owned),
            exercises: value.exercises().iter().map(Into::into).collect(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
        }
    }
}

/// Request to read a single plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetWorkoutPlanRequest {
    pub plan_id: Uuid,
}

/// Request to list a user's plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWorkoutPlansRequest {
    pub user_id: UserId,
}

/// Driving port for plan read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutPlanQuery: Send + Sync {
    /// Read a plan; unknown ids fail with `NotFound`.
    async fn get_plan(&self, request: GetWorkoutPlanRequest) -> Result<WorkoutPlanPayload, Error>;

    /// List plans owned by a user.
    async fn list_plans(
        &self,
        request: ListWorkoutPlansRequest,
    ) -> Result<Vec<WorkoutPlanPayload>, Error>;
}
