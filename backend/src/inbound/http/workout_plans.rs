//! Workout plan HTTP handlers.
//!
//! ```text
//! POST /api/v1/workout-plans
//! GET  /api/v1/workout-plans?userId=...
//! GET  /api/v1/workout-plans/{id}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    CreateWorkoutPlanRequest, CreateWorkoutPlanResponse, GetWorkoutPlanRequest,
    ListWorkoutPlansRequest, PlanExercisePayload, WorkoutPlanPayload,
};
use crate::domain::{Error, PlanExerciseDraft, WorkoutPlanDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_user_id, parse_uuid,
};

/// Exercise entry of a plan creation request.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanExerciseBody {
    #[schema(format = "uuid")]
    pub exercise_id: String,
    /// Ignored; exercises are numbered by position.
    pub order_index: Option<u32>,
    pub target_sets: Option<u32>,
    pub target_reps_min: Option<u32>,
    pub target_reps_max: Option<u32>,
    pub target_weight_kg: Option<f64>,
    pub target_duration_seconds: Option<u32>,
    /// Defaults to 60 seconds.
    pub rest_time_seconds: Option<u32>,
    pub notes: Option<String>,
}

/// Request payload for creating a workout plan.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPlanRequestBody {
    #[schema(format = "uuid")]
    pub user_id: String,
    #[schema(example = "Leg Day")]
    pub name: String,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<u32>,
    /// 1 (easiest) to 5; defaults to 1.
    pub difficulty_level: Option<u8>,
    pub goals: Option<String>,
    pub exercises: Vec<PlanExerciseBody>,
}

/// Response payload for plan creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPlanResponseBody {
    #[schema(format = "uuid")]
    pub plan_id: String,
    pub exercise_count: usize,
}

/// Stored exercise entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanExerciseResponseBody {
    #[schema(format = "uuid")]
    pub exercise_id: String,
    pub order_index: u32,
    pub target_sets: Option<u32>,
    pub target_reps_min: Option<u32>,
    pub target_reps_max: Option<u32>,
    pub target_weight_kg: Option<f64>,
    pub target_duration_seconds: Option<u32>,
    pub rest_time_seconds: u32,
    pub notes: Option<String>,
}

/// Stored workout plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<u32>,
    pub difficulty_level: u8,
    pub goals: Option<String>,
    pub exercises: Vec<PlanExerciseResponseBody>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

/// Query parameters for listing plans.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListWorkoutPlansParams {
    /// Owner whose plans are listed.
    pub user_id: Option<String>,
}

impl From<CreateWorkoutPlanResponse> for CreateWorkoutPlanResponseBody {
    fn from(value: CreateWorkoutPlanResponse) -> Self {
        Self {
            plan_id: value.plan_id.to_string(),
            exercise_count: value.exercise_count,
        }
    }
}

impl From<PlanExercisePayload> for PlanExerciseResponseBody {
    fn from(value: PlanExercisePayload) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            order_index: value.order_index,
            target_sets: value.target_sets,
            target_reps_min: value.target_reps_min,
            target_reps_max: value.target_reps_max,
            target_weight_kg: value.target_weight_kg,
            target_duration_seconds: value.target_duration_seconds,
            rest_time_seconds: value.rest_time_seconds,
            notes: value.notes,
        }
    }
}

impl From<WorkoutPlanPayload> for WorkoutPlanResponseBody {
    fn from(value: WorkoutPlanPayload) -> Self {
        Self {
            id: value.id.to_string(),
            user_id: value.user_id.to_string(),
            name: value.name,
            description: value.description,
            estimated_duration_minutes: value.estimated_duration_minutes,
            difficulty_level: value.difficulty_level,
            goals: value.goals,
            exercises: value.exercises.into_iter().map(Into::into).collect(),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

fn parse_exercises(exercises: Vec<PlanExerciseBody>) -> Result<Vec<PlanExerciseDraft>, Error> {
    exercises
        .into_iter()
        .map(|exercise| {
            Ok(PlanExerciseDraft {
                exercise_id: parse_uuid(exercise.exercise_id, FieldName::new("exerciseId"))?,
                order_index: exercise.order_index,
                target_sets: exercise.target_sets,
                target_reps_min: exercise.target_reps_min,
                target_reps_max: exercise.target_reps_max,
                target_weight_kg: exercise.target_weight_kg,
                target_duration_seconds: exercise.target_duration_seconds,
                rest_time_seconds: exercise.rest_time_seconds,
                notes: exercise.notes,
            })
        })
        .collect()
}

fn parse_create_request(
    payload: CreateWorkoutPlanRequestBody,
) -> Result<CreateWorkoutPlanRequest, Error> {
    Ok(CreateWorkoutPlanRequest {
        user_id: parse_user_id(payload.user_id, FieldName::new("userId"))?,
        plan: WorkoutPlanDraft {
            name: payload.name,
            description: payload.description,
            estimated_duration_minutes: payload.estimated_duration_minutes,
            difficulty_level: payload.difficulty_level,
            goals: payload.goals,
            exercises: parse_exercises(payload.exercises)?,
        },
    })
}

/// Create a workout plan with its ordered exercise list.
#[utoipa::path(
    post,
    path = "/api/v1/workout-plans",
    request_body = CreateWorkoutPlanRequestBody,
    responses(
        (status = 201, description = "Plan created", body = CreateWorkoutPlanResponseBody),
        (status = 400, description = "Invalid plan", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["workout-plans"],
    operation_id = "createWorkoutPlan"
)]
#[post("/workout-plans")]
pub async fn create_workout_plan(
    state: web::Data<HttpState>,
    payload: web::Json<CreateWorkoutPlanRequestBody>,
) -> ApiResult<(web::Json<CreateWorkoutPlanResponseBody>, actix_web::http::StatusCode)> {
    let request = parse_create_request(payload.into_inner())?;
    let response = state.plans.create_plan(request).await?;
    Ok((
        web::Json(CreateWorkoutPlanResponseBody::from(response)),
        actix_web::http::StatusCode::CREATED,
    ))
}

/// Fetch a single plan by id.
#[utoipa::path(
    get,
    path = "/api/v1/workout-plans/{id}",
    params(("id" = String, Path, description = "Plan identifier")),
    responses(
        (status = 200, description = "Plan", body = WorkoutPlanResponseBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown plan", body = ErrorSchema)
    ),
    tags = ["workout-plans"],
    operation_id = "getWorkoutPlan"
)]
#[get("/workout-plans/{id}")]
pub async fn get_workout_plan(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WorkoutPlanResponseBody>> {
    let plan_id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let plan = state
        .plans_query
        .get_plan(GetWorkoutPlanRequest { plan_id })
        .await?;
    Ok(web::Json(plan.into()))
}

/// List the plans owned by a user.
#[utoipa::path(
    get,
    path = "/api/v1/workout-plans",
    params(ListWorkoutPlansParams),
    responses(
        (status = 200, description = "Plans", body = [WorkoutPlanResponseBody]),
        (status = 400, description = "Missing or invalid userId", body = ErrorSchema)
    ),
    tags = ["workout-plans"],
    operation_id = "listWorkoutPlans"
)]
#[get("/workout-plans")]
pub async fn list_workout_plans(
    state: web::Data<HttpState>,
    params: web::Query<ListWorkoutPlansParams>,
) -> ApiResult<web::Json<Vec<WorkoutPlanResponseBody>>> {
    let user_field = FieldName::new("userId");
    let raw = params
        .into_inner()
        .user_id
        .ok_or_else(|| missing_field_error(user_field))?;
    let user_id = parse_user_id(raw, user_field)?;
    let plans = state
        .plans_query
        .list_plans(ListWorkoutPlansRequest { user_id })
        .await?;
    Ok(web::Json(plans.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
#[path = "workout_plans_tests.rs"]
mod tests;
