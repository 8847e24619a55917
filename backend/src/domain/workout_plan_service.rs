//! Workout plan domain service.
//!
//! Implements the plan command and query driving ports on top of a
//! [`WorkoutPlanRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{
    CreateWorkoutPlanRequest, CreateWorkoutPlanResponse, GetWorkoutPlanRequest,
    ListWorkoutPlansRequest, WorkoutPlanCommand, WorkoutPlanPayload, WorkoutPlanQuery,
    WorkoutPlanRepository, WorkoutPlanRepositoryError,
};
use crate::domain::{Error, PlanValidationError, WorkoutPlan};

pub(crate) fn map_plan_repository_error(error: WorkoutPlanRepositoryError) -> Error {
    match error {
        WorkoutPlanRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("workout plan repository unavailable: {message}"))
        }
        WorkoutPlanRepositoryError::Query { message } => {
            Error::internal(format!("workout plan repository error: {message}"))
        }
    }
}

fn map_validation_error(error: PlanValidationError) -> Error {
    let base = Error::invalid_request(error.to_string());
    match error.exercise_position() {
        Some(position) => base.with_details(json!({ "exercisePosition": position })),
        None => base,
    }
}

/// Plan service implementing [`WorkoutPlanCommand`] and [`WorkoutPlanQuery`].
#[derive(Clone)]
pub struct WorkoutPlanService<R> {
    plan_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> WorkoutPlanService<R> {
    /// Create a service backed by `plan_repo`, stamping plans with `clock`.
    pub fn new(plan_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { plan_repo, clock }
    }
}

#[async_trait]
impl<R> WorkoutPlanCommand for WorkoutPlanService<R>
where
    R: WorkoutPlanRepository,
{
    async fn create_plan(
        &self,
        request: CreateWorkoutPlanRequest,
    ) -> Result<CreateWorkoutPlanResponse, Error> {
        let plan = WorkoutPlan::create(
            Uuid::new_v4(),
            request.user_id,
            request.plan,
            self.clock.utc(),
        )
        .map_err(map_validation_error)?;

        self.plan_repo
            .save(&plan)
            .await
            .map_err(map_plan_repository_error)?;

        info!(
            plan_id = %plan.id(),
            user_id = %plan.user_id(),
            exercise_count = plan.exercises().len(),
            "workout plan created"
        );
        Ok(CreateWorkoutPlanResponse {
            plan_id: plan.id(),
            exercise_count: plan.exercises().len(),
        })
    }
}

#[async_trait]
impl<R> WorkoutPlanQuery for WorkoutPlanService<R>
where
    R: WorkoutPlanRepository,
{
    async fn get_plan(&self, request: GetWorkoutPlanRequest) -> Result<WorkoutPlanPayload, Error> {
        let plan = self
            .plan_repo
            .find_by_id(&request.plan_id)
            .await
            .map_err(map_plan_repository_error)?
            .ok_or_else(|| Error::not_found(format!("workout plan {} not found", request.plan_id)))?;

        Ok(WorkoutPlanPayload::from(&plan))
    }

    async fn list_plans(
        &self,
        request: ListWorkoutPlansRequest,
    ) -> Result<Vec<WorkoutPlanPayload>, Error> {
        let plans = self
            .plan_repo
            .list_for_user(&request.user_id)
            .await
            .map_err(map_plan_repository_error)?;

        Ok(plans.iter().map(WorkoutPlanPayload::from).collect())
    }
}

#[cfg(test)]
#[path = "workout_plan_service_tests.rs"]
mod tests;
