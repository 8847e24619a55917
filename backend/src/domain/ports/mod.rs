//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod scheduled_workout_command;
mod scheduled_workout_query;
mod scheduled_workout_repository;
mod workout_plan_command;
mod workout_plan_query;
mod workout_plan_repository;

#[cfg(test)]
pub use scheduled_workout_command::MockScheduledWorkoutCommand;
pub use scheduled_workout_command::{
    CompleteWorkoutRequest, RescheduleWorkoutRequest, ScheduleWorkoutRequest,
    ScheduledWorkoutCommand, ScheduledWorkoutPayload, WorkoutTransitionRequest,
};
#[cfg(test)]
pub use scheduled_workout_query::MockScheduledWorkoutQuery;
pub use scheduled_workout_query::ScheduledWorkoutQuery;
#[cfg(test)]
pub use scheduled_workout_repository::MockScheduledWorkoutRepository;
pub use scheduled_workout_repository::{
    ScheduledWorkoutRepository, ScheduledWorkoutRepositoryError,
};
#[cfg(test)]
pub use workout_plan_command::MockWorkoutPlanCommand;
pub use workout_plan_command::{
    CreateWorkoutPlanRequest, CreateWorkoutPlanResponse, WorkoutPlanCommand,
};
#[cfg(test)]
pub use workout_plan_query::MockWorkoutPlanQuery;
pub use workout_plan_query::{
    GetWorkoutPlanRequest, ListWorkoutPlansRequest, PlanExercisePayload, WorkoutPlanPayload,
    WorkoutPlanQuery,
};
#[cfg(test)]
pub use workout_plan_repository::MockWorkoutPlanRepository;
pub use workout_plan_repository::{WorkoutPlanRepository, WorkoutPlanRepositoryError};
