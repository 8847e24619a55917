//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{WorkoutLifecycleService, WorkoutPlanService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryScheduledWorkoutRepository, InMemoryWorkoutPlanRepository};
use crate::test_support::clock::MutableClock;

pub const OWNER_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const SQUAT_ID: &str = "22222222-2222-2222-2222-222222222222";

/// First Monday of March 2026, 07:00 UTC.
pub fn test_clock() -> Arc<MutableClock> {
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
    let seven = NaiveTime::from_hms_opt(7, 0, 0).expect("valid time");
    Arc::new(MutableClock::at(day, seven))
}

/// Real services over empty in-memory stores, driven by `clock`.
pub fn in_memory_state(clock: Arc<MutableClock>) -> HttpState {
    let plans = Arc::new(InMemoryWorkoutPlanRepository::new());
    let workouts = Arc::new(InMemoryScheduledWorkoutRepository::new());
    let plan_service = Arc::new(WorkoutPlanService::new(plans.clone(), clock.clone()));
    let lifecycle = Arc::new(WorkoutLifecycleService::new(workouts, plans, clock));
    HttpState::new(plan_service.clone(), plan_service, lifecycle.clone(), lifecycle)
}

/// Plan body with a single squat exercise.
pub fn leg_day_body() -> serde_json::Value {
    serde_json::json!({
        "userId": OWNER_ID,
        "name": "Leg Day",
        "difficultyLevel": 3,
        "exercises": [
            {
                "exerciseId": SQUAT_ID,
                "targetSets": 4,
                "targetRepsMin": 8,
                "targetRepsMax": 12
            }
        ]
    })
}
