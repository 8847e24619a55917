//! Scheduled workout HTTP handlers.
//!
//! ```text
//! POST /api/v1/scheduled-workouts
//! GET  /api/v1/scheduled-workouts?userId=...
//! GET  /api/v1/scheduled-workouts/{id}
//! POST /api/v1/scheduled-workouts/{id}/start
//! POST /api/v1/scheduled-workouts/{id}/complete
//! POST /api/v1/scheduled-workouts/{id}/cancel
//! PUT  /api/v1/scheduled-workouts/{id}/schedule
//! ```
//!
//! Failures map onto four outcomes:
//!
//! - `400 invalid_request`: bad input, such as a rating outside 1 to 5 or a
//!   date in the past.
//! - `404 not_found`: unknown workout or plan.
//! - `409 conflict` with `details.code = "invalid_transition"`: the status
//!   does not allow the action.
//! - `409 conflict` with `details.code = "version_mismatch"`: the request
//!   carried an `expectedVersion` and another request changed the workout
//!   first. Two clients racing `start` and `cancel` on the same version see
//!   one success and one of these.

use actix_web::{get, post, put, web};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{
    CompleteWorkoutRequest, RescheduleWorkoutRequest, ScheduleWorkoutRequest,
    ScheduledWorkoutPayload, WorkoutTransitionRequest,
};
use crate::domain::{EligibleAction, Error, UserId, WorkoutStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EligibleActionSchema, ErrorSchema, WorkoutStatusSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_date, parse_optional_time, parse_user_id, parse_uuid,
};

/// Request payload for scheduling a plan.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWorkoutRequestBody {
    #[schema(format = "uuid")]
    pub plan_id: String,
    #[schema(format = "date", example = "2026-03-02")]
    pub scheduled_date: String,
    #[schema(example = "07:30")]
    pub scheduled_time: Option<String>,
}

/// Request payload for completing a workout.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteWorkoutRequestBody {
    /// Session rating from 1 to 5.
    pub rating: Option<i64>,
    pub calories_burned: Option<i64>,
    /// Defaults to the minutes elapsed since the workout started.
    pub actual_duration_minutes: Option<i64>,
    pub expected_version: Option<u64>,
}

/// Request payload for moving a workout to a new slot.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleWorkoutRequestBody {
    #[schema(format = "date", example = "2026-03-03")]
    pub scheduled_date: String,
    #[schema(example = "18:00")]
    pub scheduled_time: Option<String>,
    pub expected_version: Option<u64>,
}

/// Optional concurrency guard for body-less transitions.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TransitionParams {
    /// Apply only if the workout is still at this version.
    pub expected_version: Option<u64>,
}

/// Query parameters for listing workouts.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListScheduledWorkoutsParams {
    /// Owner whose workouts are listed.
    pub user_id: Option<String>,
}

/// Scheduled workout with its derived presentation fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkoutResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub plan_id: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    #[schema(format = "date")]
    pub scheduled_date: String,
    /// `HH:MM`, with `:SS` appended when the stored time has seconds.
    #[schema(example = "07:30")]
    pub scheduled_time: String,
    #[schema(value_type = WorkoutStatusSchema)]
    pub status: WorkoutStatus,
    pub actual_duration_minutes: Option<u32>,
    pub calories_burned: Option<u32>,
    pub rating: Option<u8>,
    #[schema(format = "date-time")]
    pub started_at: Option<String>,
    #[schema(format = "date-time")]
    pub completed_at: Option<String>,
    /// Increments on every accepted change.
    pub version: u64,
    pub is_today: bool,
    /// The single primary action a client should offer.
    #[schema(value_type = EligibleActionSchema)]
    pub eligible_action: EligibleAction,
}

impl From<ScheduledWorkoutPayload> for ScheduledWorkoutResponseBody {
    fn from(value: ScheduledWorkoutPayload) -> Self {
        Self {
            id: value.id.to_string(),
            plan_id: value.plan_id.to_string(),
            user_id: value.user_id.to_string(),
            scheduled_date: value.scheduled_date.format("%Y-%m-%d").to_string(),
            scheduled_time: render_time(value.scheduled_time),
            status: value.status,
            actual_duration_minutes: value.actual_duration_minutes,
            calories_burned: value.calories_burned,
            rating: value.rating,
            started_at: value.started_at.map(|at| at.to_rfc3339()),
            completed_at: value.completed_at.map(|at| at.to_rfc3339()),
            version: value.version,
            is_today: value.is_today,
            eligible_action: value.eligible_action,
        }
    }
}

/// `HH:MM`, or `HH:MM:SS` when the stored time carries seconds.
fn render_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

fn workout_id(path: web::Path<String>) -> Result<Uuid, Error> {
    parse_uuid(path.into_inner(), FieldName::new("id"))
}

fn parse_list_owner(params: ListScheduledWorkoutsParams) -> Result<UserId, Error> {
    let field = FieldName::new("userId");
    let raw = params.user_id.ok_or_else(|| missing_field_error(field))?;
    parse_user_id(raw, field)
}

/// Schedule an existing plan for a date and time.
#[utoipa::path(
    post,
    path = "/api/v1/scheduled-workouts",
    request_body = ScheduleWorkoutRequestBody,
    responses(
        (status = 201, description = "Workout scheduled", body = ScheduledWorkoutResponseBody),
        (status = 400, description = "Invalid date or time", body = ErrorSchema),
        (status = 404, description = "Unknown plan", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "scheduleWorkout"
)]
#[post("/scheduled-workouts")]
pub async fn schedule_workout(
    state: web::Data<HttpState>,
    payload: web::Json<ScheduleWorkoutRequestBody>,
) -> ApiResult<(web::Json<ScheduledWorkoutResponseBody>, actix_web::http::StatusCode)> {
    let body = payload.into_inner();
    let request = ScheduleWorkoutRequest {
        plan_id: parse_uuid(body.plan_id, FieldName::new("planId"))?,
        scheduled_date: parse_date(body.scheduled_date, FieldName::new("scheduledDate"))?,
        scheduled_time: parse_optional_time(body.scheduled_time, FieldName::new("scheduledTime"))?,
    };
    let workout = state.workouts.schedule(request).await?;
    Ok((
        web::Json(workout.into()),
        actix_web::http::StatusCode::CREATED,
    ))
}

/// Fetch a single scheduled workout.
#[utoipa::path(
    get,
    path = "/api/v1/scheduled-workouts/{id}",
    params(("id" = String, Path, description = "Scheduled workout identifier")),
    responses(
        (status = 200, description = "Scheduled workout", body = ScheduledWorkoutResponseBody),
        (status = 404, description = "Unknown workout", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "getScheduledWorkout"
)]
#[get("/scheduled-workouts/{id}")]
pub async fn get_scheduled_workout(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ScheduledWorkoutResponseBody>> {
    let id = workout_id(path)?;
    let workout = state.workouts_query.get_workout(id).await?;
    Ok(web::Json(workout.into()))
}

/// List a user's scheduled workouts in calendar order.
#[utoipa::path(
    get,
    path = "/api/v1/scheduled-workouts",
    params(ListScheduledWorkoutsParams),
    responses(
        (status = 200, description = "Scheduled workouts", body = [ScheduledWorkoutResponseBody]),
        (status = 400, description = "Missing or invalid userId", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "listScheduledWorkouts"
)]
#[get("/scheduled-workouts")]
pub async fn list_scheduled_workouts(
    state: web::Data<HttpState>,
    params: web::Query<ListScheduledWorkoutsParams>,
) -> ApiResult<web::Json<Vec<ScheduledWorkoutResponseBody>>> {
    let user_id = parse_list_owner(params.into_inner())?;
    let workouts = state.workouts_query.list_workouts(user_id).await?;
    Ok(web::Json(workouts.into_iter().map(Into::into).collect()))
}

/// Start a workout scheduled for today.
#[utoipa::path(
    post,
    path = "/api/v1/scheduled-workouts/{id}/start",
    params(("id" = String, Path, description = "Scheduled workout identifier"), TransitionParams),
    responses(
        (status = 200, description = "Workout started", body = ScheduledWorkoutResponseBody),
        (status = 404, description = "Unknown workout", body = ErrorSchema),
        (status = 409, description = "Status does not allow starting", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "startWorkout"
)]
#[post("/scheduled-workouts/{id}/start")]
pub async fn start_workout(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<TransitionParams>,
) -> ApiResult<web::Json<ScheduledWorkoutResponseBody>> {
    let request = WorkoutTransitionRequest {
        workout_id: workout_id(path)?,
        expected_version: params.into_inner().expected_version,
    };
    let workout = state.workouts.start(request).await?;
    Ok(web::Json(workout.into()))
}

/// Complete an in-progress workout with its outcome.
#[utoipa::path(
    post,
    path = "/api/v1/scheduled-workouts/{id}/complete",
    params(("id" = String, Path, description = "Scheduled workout identifier")),
    request_body = CompleteWorkoutRequestBody,
    responses(
        (status = 200, description = "Workout completed", body = ScheduledWorkoutResponseBody),
        (status = 400, description = "Invalid outcome", body = ErrorSchema),
        (status = 404, description = "Unknown workout", body = ErrorSchema),
        (status = 409, description = "Status does not allow completion", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "completeWorkout"
)]
#[post("/scheduled-workouts/{id}/complete")]
pub async fn complete_workout(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CompleteWorkoutRequestBody>,
) -> ApiResult<web::Json<ScheduledWorkoutResponseBody>> {
    let workout_id = workout_id(path)?;
    let body = payload.into_inner();
    let rating = body
        .rating
        .ok_or_else(|| missing_field_error(FieldName::new("rating")))?;
    let request = CompleteWorkoutRequest {
        workout_id,
        expected_version: body.expected_version,
        calories_burned: body.calories_burned,
        rating,
        actual_duration_minutes: body.actual_duration_minutes,
    };
    let workout = state.workouts.complete(request).await?;
    Ok(web::Json(workout.into()))
}

/// Cancel a workout that has not finished.
#[utoipa::path(
    post,
    path = "/api/v1/scheduled-workouts/{id}/cancel",
    params(("id" = String, Path, description = "Scheduled workout identifier"), TransitionParams),
    responses(
        (status = 200, description = "Workout cancelled", body = ScheduledWorkoutResponseBody),
        (status = 404, description = "Unknown workout", body = ErrorSchema),
        (status = 409, description = "Workout already finished", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "cancelWorkout"
)]
#[post("/scheduled-workouts/{id}/cancel")]
pub async fn cancel_workout(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<TransitionParams>,
) -> ApiResult<web::Json<ScheduledWorkoutResponseBody>> {
    let request = WorkoutTransitionRequest {
        workout_id: workout_id(path)?,
        expected_version: params.into_inner().expected_version,
    };
    let workout = state.workouts.cancel(request).await?;
    Ok(web::Json(workout.into()))
}

/// Move a scheduled workout to a new date and time.
#[utoipa::path(
    put,
    path = "/api/v1/scheduled-workouts/{id}/schedule",
    params(("id" = String, Path, description = "Scheduled workout identifier")),
    request_body = RescheduleWorkoutRequestBody,
    responses(
        (status = 200, description = "Workout rescheduled", body = ScheduledWorkoutResponseBody),
        (status = 400, description = "Invalid date or time", body = ErrorSchema),
        (status = 404, description = "Unknown workout", body = ErrorSchema),
        (status = 409, description = "Workout is no longer scheduled", body = ErrorSchema)
    ),
    tags = ["scheduled-workouts"],
    operation_id = "rescheduleWorkout"
)]
#[put("/scheduled-workouts/{id}/schedule")]
pub async fn reschedule_workout(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RescheduleWorkoutRequestBody>,
) -> ApiResult<web::Json<ScheduledWorkoutResponseBody>> {
    let workout_id = workout_id(path)?;
    let body = payload.into_inner();
    let request = RescheduleWorkoutRequest {
        workout_id,
        expected_version: body.expected_version,
        scheduled_date: parse_date(body.scheduled_date, FieldName::new("scheduledDate"))?,
        scheduled_time: parse_optional_time(body.scheduled_time, FieldName::new("scheduledTime"))?,
    };
    let workout = state.workouts.reschedule(request).await?;
    Ok(web::Json(workout.into()))
}

#[cfg(test)]
#[path = "scheduled_workouts_tests.rs"]
mod tests;
