//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: plan, scheduled workout and health endpoints
//! - **Schemas**: request and response bodies plus domain type wrappers
//!   ([`ErrorSchema`], [`WorkoutStatusSchema`]) that document domain types
//!   without coupling them to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::scheduled_workouts::{
    CompleteWorkoutRequestBody, RescheduleWorkoutRequestBody, ScheduleWorkoutRequestBody,
    ScheduledWorkoutResponseBody,
};
use crate::inbound::http::schemas::{
    EligibleActionSchema, ErrorCodeSchema, ErrorSchema, WorkoutStatusSchema,
};
use crate::inbound::http::workout_plans::{
    CreateWorkoutPlanRequestBody, CreateWorkoutPlanResponseBody, PlanExerciseBody,
    PlanExerciseResponseBody, WorkoutPlanResponseBody,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workouts backend API",
        description = "HTTP interface for workout plans, scheduling and the workout lifecycle."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::workout_plans::create_workout_plan,
        crate::inbound::http::workout_plans::get_workout_plan,
        crate::inbound::http::workout_plans::list_workout_plans,
        crate::inbound::http::scheduled_workouts::schedule_workout,
        crate::inbound::http::scheduled_workouts::get_scheduled_workout,
        crate::inbound::http::scheduled_workouts::list_scheduled_workouts,
        crate::inbound::http::scheduled_workouts::start_workout,
        crate::inbound::http::scheduled_workouts::complete_workout,
        crate::inbound::http::scheduled_workouts::cancel_workout,
        crate::inbound::http::scheduled_workouts::reschedule_workout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        WorkoutStatusSchema,
        EligibleActionSchema,
        CreateWorkoutPlanRequestBody,
        CreateWorkoutPlanResponseBody,
        PlanExerciseBody,
        PlanExerciseResponseBody,
        WorkoutPlanResponseBody,
        ScheduleWorkoutRequestBody,
        CompleteWorkoutRequestBody,
        RescheduleWorkoutRequestBody,
        ScheduledWorkoutResponseBody,
    )),
    tags(
        (name = "workout-plans", description = "Reusable workout templates"),
        (name = "scheduled-workouts", description = "Dated workouts and their lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
