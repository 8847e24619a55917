//! Port for workout plan persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{UserId, WorkoutPlan};

use super::define_port_error;

define_port_error! {
    /// Errors raised by workout plan repository adapters.
    pub enum WorkoutPlanRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "workout plan repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "workout plan repository query failed: {message}",
    }
}

/// Port for storing plans and looking them up by id or owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    /// Persist a newly created plan.
    async fn save(&self, plan: &WorkoutPlan) -> Result<(), WorkoutPlanRepositoryError>;

    /// Find a plan by id.
    async fn find_by_id(
        &self,
        plan_id: &Uuid,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError>;

    /// List plans owned by a user, oldest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkoutPlan>, WorkoutPlanRepositoryError>;
}
