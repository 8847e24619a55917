//! In-memory [`WorkoutPlanRepository`].

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{WorkoutPlanRepository, WorkoutPlanRepositoryError};
use crate::domain::{UserId, WorkoutPlan};

fn poisoned() -> WorkoutPlanRepositoryError {
    WorkoutPlanRepositoryError::connection("plan store lock poisoned")
}

/// Plan store keyed by plan id.
#[derive(Debug, Default)]
pub struct InMemoryWorkoutPlanRepository {
    store: RwLock<HashMap<Uuid, WorkoutPlan>>,
}

impl InMemoryWorkoutPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutPlanRepository for InMemoryWorkoutPlanRepository {
    async fn save(&self, plan: &WorkoutPlan) -> Result<(), WorkoutPlanRepositoryError> {
        let mut guard = self.store.write().map_err(|_| poisoned())?;
        guard.insert(plan.id(), plan.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        plan_id: &Uuid,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let guard = self.store.read().map_err(|_| poisoned())?;
        Ok(guard.get(plan_id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let guard = self.store.read().map_err(|_| poisoned())?;
        let mut plans: Vec<WorkoutPlan> = guard
            .values()
            .filter(|plan| plan.user_id() == user_id)
            .cloned()
            .collect();
        plans.sort_by_key(|plan| (plan.created_at(), plan.id()));
        Ok(plans)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::{PlanExerciseDraft, WorkoutPlanDraft};

    fn plan_for(user_id: &UserId, name: &str, minutes_after: i64) -> WorkoutPlan {
        let created_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
            + Duration::minutes(minutes_after);
        WorkoutPlan::create(
            Uuid::new_v4(),
            user_id.clone(),
            WorkoutPlanDraft {
                name: name.to_owned(),
                description: None,
                estimated_duration_minutes: None,
                difficulty_level: None,
                goals: None,
                exercises: vec![PlanExerciseDraft::for_exercise(Uuid::new_v4())],
            },
            created_at,
        )
        .expect("valid plan")
    }

    #[rstest]
    #[tokio::test]
    async fn saved_plans_can_be_found() {
        let repo = InMemoryWorkoutPlanRepository::new();
        let plan = plan_for(&UserId::random(), "Push", 0);

        repo.save(&plan).await.expect("save succeeds");

        let found = repo.find_by_id(&plan.id()).await.expect("lookup succeeds");
        assert_eq!(found, Some(plan));
        assert!(
            repo.find_by_id(&Uuid::new_v4())
                .await
                .expect("lookup succeeds")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn listing_is_scoped_to_owner_and_ordered_by_creation() {
        let repo = InMemoryWorkoutPlanRepository::new();
        let owner = UserId::random();
        let later = plan_for(&owner, "Pull", 30);
        let earlier = plan_for(&owner, "Push", 0);
        let foreign = plan_for(&UserId::random(), "Legs", 10);
        for plan in [&later, &earlier, &foreign] {
            repo.save(plan).await.expect("save succeeds");
        }

        let names: Vec<String> = repo
            .list_for_user(&owner)
            .await
            .expect("list succeeds")
            .iter()
            .map(|plan| plan.name().to_owned())
            .collect();

        assert_eq!(names, ["Push", "Pull"]);
    }
}
