//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed workout plans and scheduled workouts, the
//! lifecycle state machine that governs them, and the services that expose
//! that behaviour through driving ports. Types are immutable; transitions
//! return new values.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - TraceId: per-request correlation identifier.
//! - UserId: owning-user identity.
//! - WorkoutPlan / WorkoutPlanDraft: plan templates and their validation.
//! - ScheduledWorkout / WorkoutStatus / EligibleAction: the lifecycle.
//! - WorkoutPlanService / WorkoutLifecycleService: driving port adapters.

pub mod entity_locks;
pub mod error;
pub mod plans;
pub mod ports;
pub mod trace_id;
pub mod user;
mod workout_lifecycle_service;
mod workout_plan_service;
pub mod workouts;

pub use self::entity_locks::EntityLocks;
pub use self::error::{Error, ErrorCode};
pub use self::plans::{
    DEFAULT_REST_TIME_SECONDS, DifficultyLevel, PlanExercise, PlanExerciseDraft,
    PlanValidationError, WorkoutPlan, WorkoutPlanDraft, validate_plan_creation,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserValidationError};
pub use self::workout_lifecycle_service::WorkoutLifecycleService;
pub use self::workout_plan_service::WorkoutPlanService;
pub use self::workouts::{
    CompletionInput, EligibleAction, LifecycleError, Rating, ScheduledWorkout,
    ScheduledWorkoutDraft, WorkoutAction, WorkoutStatus, WorkoutValidationError, eligible_action,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use workouts_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::conflict("workout already started"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
