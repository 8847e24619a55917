//! Workout plan entities and drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

use super::{PlanValidationError, validate_plan_creation};

/// Rest period applied when an exercise draft does not specify one.
pub const DEFAULT_REST_TIME_SECONDS: u32 = 60;

/// Caller-supplied exercise entry for a plan draft.
///
/// `order_index` is accepted for compatibility with clients that send it,
/// but it is always replaced by the submission position on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExerciseDraft {
    pub exercise_id: Uuid,
    pub order_index: Option<u32>,
    pub target_sets: Option<u32>,
    pub target_reps_min: Option<u32>,
    pub target_reps_max: Option<u32>,
    pub target_weight_kg: Option<f64>,
    pub target_duration_seconds: Option<u32>,
    pub rest_time_seconds: Option<u32>,
    pub notes: Option<String>,
}

impl PlanExerciseDraft {
    /// Draft referencing `exercise_id` with no targets set.
    pub fn for_exercise(exercise_id: Uuid) -> Self {
        Self {
            exercise_id,
            order_index: None,
            target_sets: None,
            target_reps_min: None,
            target_reps_max: None,
            target_weight_kg: None,
            target_duration_seconds: None,
            rest_time_seconds: None,
            notes: None,
        }
    }
}

/// Caller-supplied plan content, validated by [`validate_plan_creation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanDraft {
    pub name: String,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<u32>,
    pub difficulty_level: Option<u8>,
    pub goals: Option<String>,
    pub exercises: Vec<PlanExerciseDraft>,
}

/// Plan difficulty on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    /// Lowest accepted difficulty.
    pub const MIN: u8 = 1;
    /// Highest accepted difficulty.
    pub const MAX: u8 = 5;

    /// Validate a raw difficulty value.
    pub fn new(value: u8) -> Result<Self, PlanValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PlanValidationError::InvalidDifficulty { value })
        }
    }

    /// Raw difficulty value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// A validated exercise entry inside a [`WorkoutPlan`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanExercise {
    exercise_id: Uuid,
    order_index: u32,
    target_sets: Option<u32>,
    target_reps_min: Option<u32>,
    target_reps_max: Option<u32>,
    target_weight_kg: Option<f64>,
    target_duration_seconds: Option<u32>,
    rest_time_seconds: u32,
    notes: Option<String>,
}

impl PlanExercise {
    fn from_draft(draft: PlanExerciseDraft, order_index: u32) -> Self {
        Self {
            exercise_id: draft.exercise_id,
            order_index,
            target_sets: draft.target_sets,
            target_reps_min: draft.target_reps_min,
            target_reps_max: draft.target_reps_max,
            target_weight_kg: draft.target_weight_kg,
            target_duration_seconds: draft.target_duration_seconds,
            rest_time_seconds: draft.rest_time_seconds.unwrap_or(DEFAULT_REST_TIME_SECONDS),
            notes: draft.notes,
        }
    }

    /// Reference into the exercise catalog.
    pub fn exercise_id(&self) -> Uuid {
        self.exercise_id
    }

    /// 1-based position within the plan.
    pub fn order_index(&self) -> u32 {
        self.order_index
    }

    pub fn target_sets(&self) -> Option<u32> {
        self.target_sets
    }

    pub fn target_reps_min(&self) -> Option<u32> {
        self.target_reps_min
    }

    pub fn target_reps_max(&self) -> Option<u32> {
        self.target_reps_max
    }

    pub fn target_weight_kg(&self) -> Option<f64> {
        self.target_weight_kg
    }

    pub fn target_duration_seconds(&self) -> Option<u32> {
        self.target_duration_seconds
    }

    pub fn rest_time_seconds(&self) -> u32 {
        self.rest_time_seconds
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A reusable workout template owned by a user.
///
/// ## Invariants
/// - `name` is non-blank and stored trimmed.
/// - `exercises` is non-empty and ordered by contiguous 1-based indices.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    id: Uuid,
    user_id: UserId,
    name: String,
    description: Option<String>,
    estimated_duration_minutes: Option<u32>,
    difficulty_level: DifficultyLevel,
    goals: Option<String>,
    exercises: Vec<PlanExercise>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Validate a draft and build a plan, re-indexing exercises from 1.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use uuid::Uuid;
    /// use workouts_backend::domain::{PlanExerciseDraft, UserId, WorkoutPlan, WorkoutPlanDraft};
    ///
    /// let mut exercise = PlanExerciseDraft::for_exercise(Uuid::new_v4());
    /// exercise.order_index = Some(7);
    /// let draft = WorkoutPlanDraft {
    ///     name: "Leg Day".to_owned(),
    ///     description: None,
    ///     estimated_duration_minutes: Some(45),
    ///     difficulty_level: Some(3),
    ///     goals: None,
    ///     exercises: vec![exercise],
    /// };
    /// let plan = WorkoutPlan::create(Uuid::new_v4(), UserId::random(), draft, Utc::now())
    ///     .expect("valid plan");
    /// assert_eq!(plan.exercises()[0].order_index(), 1);
    /// ```
    pub fn create(
        id: Uuid,
        user_id: UserId,
        draft: WorkoutPlanDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, PlanValidationError> {
        validate_plan_creation(&draft)?;

        let difficulty_level = draft
            .difficulty_level
            .map(DifficultyLevel::new)
            .transpose()?
            .unwrap_or_default();
        let exercises = (1_u32..)
            .zip(draft.exercises)
            .map(|(order_index, exercise)| PlanExercise::from_draft(exercise, order_index))
            .collect();

        Ok(Self {
            id,
            user_id,
            name: draft.name.trim().to_owned(),
            description: draft.description,
            estimated_duration_minutes: draft.estimated_duration_minutes,
            difficulty_level,
            goals: draft.goals,
            exercises,
            created_at,
            updated_at: created_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn estimated_duration_minutes(&self) -> Option<u32> {
        self.estimated_duration_minutes
    }

    pub fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty_level
    }

    pub fn goals(&self) -> Option<&str> {
        self.goals.as_deref()
    }

    /// Exercises in plan order.
    pub fn exercises(&self) -> &[PlanExercise] {
        self.exercises.as_slice()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
