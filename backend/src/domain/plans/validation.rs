//! Plan draft validation.

use super::{DifficultyLevel, PlanExerciseDraft, PlanValidationError, WorkoutPlanDraft};

/// Check a plan draft before it is accepted into the catalog.
///
/// Checks run in a fixed order: name, exercise list, plan-level ranges,
/// then each exercise in submission order. The first failure wins.
///
/// # Examples
/// ```
/// use workouts_backend::domain::{PlanValidationError, WorkoutPlanDraft, validate_plan_creation};
///
/// let draft = WorkoutPlanDraft {
///     name: "   ".to_owned(),
///     description: None,
///     estimated_duration_minutes: None,
///     difficulty_level: None,
///     goals: None,
///     exercises: Vec::new(),
/// };
/// assert_eq!(validate_plan_creation(&draft), Err(PlanValidationError::NameRequired));
/// ```
pub fn validate_plan_creation(draft: &WorkoutPlanDraft) -> Result<(), PlanValidationError> {
    if draft.name.trim().is_empty() {
        return Err(PlanValidationError::NameRequired);
    }
    if draft.exercises.is_empty() {
        return Err(PlanValidationError::ExercisesRequired);
    }
    if let Some(value) = draft.difficulty_level {
        DifficultyLevel::new(value)?;
    }
    if draft.estimated_duration_minutes == Some(0) {
        return Err(PlanValidationError::NonPositiveDuration);
    }

    draft
        .exercises
        .iter()
        .enumerate()
        .try_for_each(|(position, exercise)| validate_exercise(position, exercise))
}

fn validate_exercise(
    position: usize,
    exercise: &PlanExerciseDraft,
) -> Result<(), PlanValidationError> {
    if let (Some(min), Some(max)) = (exercise.target_reps_min, exercise.target_reps_max) {
        if max < min {
            return Err(PlanValidationError::InvalidRepRange { position });
        }
    }

    match exercise.target_weight_kg {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(PlanValidationError::InvalidTargetWeight { position, value })
        }
        _ => Ok(()),
    }
}
