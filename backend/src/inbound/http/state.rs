//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ScheduledWorkoutCommand, ScheduledWorkoutQuery, WorkoutPlanCommand, WorkoutPlanQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub plans: Arc<dyn WorkoutPlanCommand>,
    pub plans_query: Arc<dyn WorkoutPlanQuery>,
    pub workouts: Arc<dyn ScheduledWorkoutCommand>,
    pub workouts_query: Arc<dyn ScheduledWorkoutQuery>,
}

impl HttpState {
    /// Construct state from the plan and workout ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use workouts_backend::domain::{WorkoutLifecycleService, WorkoutPlanService};
    /// use workouts_backend::inbound::http::state::HttpState;
    /// use workouts_backend::outbound::memory::{
    ///     InMemoryScheduledWorkoutRepository, InMemoryWorkoutPlanRepository,
    /// };
    ///
    /// let plans = Arc::new(InMemoryWorkoutPlanRepository::new());
    /// let plan_service = Arc::new(WorkoutPlanService::new(plans.clone(), Arc::new(DefaultClock)));
    /// let lifecycle = Arc::new(WorkoutLifecycleService::new(
    ///     Arc::new(InMemoryScheduledWorkoutRepository::new()),
    ///     plans,
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(plan_service.clone(), plan_service, lifecycle.clone(), lifecycle);
    /// let _workouts = state.workouts.clone();
    /// ```
    pub fn new(
        plans: Arc<dyn WorkoutPlanCommand>,
        plans_query: Arc<dyn WorkoutPlanQuery>,
        workouts: Arc<dyn ScheduledWorkoutCommand>,
        workouts_query: Arc<dyn ScheduledWorkoutQuery>,
    ) -> Self {
        Self {
            plans,
            plans_query,
            workouts,
            workouts_query,
        }
    }
}
