//! Driving port for workout plan creation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, UserId, WorkoutPlanDraft};

/// Request to create a plan on behalf of `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPlanRequest {
    pub user_id: UserId,
    pub plan: WorkoutPlanDraft,
}

/// Response from creating a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPlanResponse {
    pub plan_id: Uuid,
    pub exercise_count: usize,
}

/// Driving port for plan write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutPlanCommand: Send + Sync {
    /// Validate and store a plan, returning its id and exercise count.
    ///
    /// Exercises are re-indexed from 1 in submission order. Validation
    /// failures surface as [`crate::domain::ErrorCode::InvalidRequest`].
    async fn create_plan(
        &self,
        request: CreateWorkoutPlanRequest,
    ) -> Result<CreateWorkoutPlanResponse, Error>;
}
