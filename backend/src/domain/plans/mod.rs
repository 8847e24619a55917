//! Workout plan templates and their creation rules.
//!
//! A plan is a reusable template owned by a user: a name, optional
//! metadata, and an ordered list of exercise targets. Scheduled workouts
//! reference plans by id but never own them.

use std::fmt;

mod plan;
mod validation;

pub use plan::{
    DEFAULT_REST_TIME_SECONDS, DifficultyLevel, PlanExercise, PlanExerciseDraft, WorkoutPlan,
    WorkoutPlanDraft,
};
pub use validation::validate_plan_creation;

/// Validation errors raised when a plan draft is accepted into the catalog.
///
/// Exercise positions are zero-based indices into the submitted list.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanValidationError {
    NameRequired,
    ExercisesRequired,
    InvalidRepRange { position: usize },
    InvalidDifficulty { value: u8 },
    NonPositiveDuration,
    InvalidTargetWeight { position: usize, value: f64 },
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "name required"),
            Self::ExercisesRequired => write!(f, "exercises required"),
            Self::InvalidRepRange { .. } => write!(f, "invalid rep range"),
            Self::InvalidDifficulty { value } => {
                write!(f, "difficulty level must be between 1 and 5 (got {value})")
            }
            Self::NonPositiveDuration => {
                write!(f, "estimated duration must be a positive number of minutes")
            }
            Self::InvalidTargetWeight { value, .. } => {
                write!(f, "target weight must be finite and non-negative (got {value})")
            }
        }
    }
}

impl std::error::Error for PlanValidationError {}

impl PlanValidationError {
    /// Zero-based position of the offending exercise, when one is involved.
    pub fn exercise_position(&self) -> Option<usize> {
        match self {
            Self::InvalidRepRange { position } | Self::InvalidTargetWeight { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }
}
