//! In-memory repositories.
//!
//! Values are stored and returned as clones, so readers always observe a
//! complete snapshot and never a half-applied transition.

mod scheduled_workout_repository;
mod workout_plan_repository;

pub use scheduled_workout_repository::InMemoryScheduledWorkoutRepository;
pub use workout_plan_repository::InMemoryWorkoutPlanRepository;
