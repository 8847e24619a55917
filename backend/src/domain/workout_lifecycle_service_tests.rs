//! Tests for the workout lifecycle service.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{
    MockScheduledWorkoutRepository, MockWorkoutPlanRepository, WorkoutPlanRepositoryError,
};
use crate::domain::{
    EligibleAction, ErrorCode, PlanExerciseDraft, WorkoutPlan, WorkoutPlanDraft, WorkoutStatus,
};
use crate::outbound::memory::{InMemoryScheduledWorkoutRepository, InMemoryWorkoutPlanRepository};
use crate::test_support::clock::MutableClock;

type MockService =
    WorkoutLifecycleService<MockScheduledWorkoutRepository, MockWorkoutPlanRepository>;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

fn seven_am() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).expect("valid time")
}

fn clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::at(today(), seven_am()))
}

fn mock_service(
    workouts: MockScheduledWorkoutRepository,
    plans: MockWorkoutPlanRepository,
) -> MockService {
    WorkoutLifecycleService::new(Arc::new(workouts), Arc::new(plans), clock())
}

fn leg_day_plan(user_id: &UserId) -> WorkoutPlan {
    WorkoutPlan::create(
        Uuid::new_v4(),
        user_id.clone(),
        WorkoutPlanDraft {
            name: "Leg Day".to_owned(),
            description: None,
            estimated_duration_minutes: Some(45),
            difficulty_level: None,
            goals: None,
            exercises: vec![PlanExerciseDraft::for_exercise(Uuid::new_v4())],
        },
        clock().utc(),
    )
    .expect("valid plan")
}

fn scheduled_on(date: NaiveDate) -> ScheduledWorkout {
    ScheduledWorkout::schedule(
        ScheduledWorkoutDraft {
            id: Uuid::new_v4(),
            plan_id: Uuid::new_v4(),
            user_id: UserId::random(),
            scheduled_date: date,
            scheduled_time: Some(seven_am()),
        },
        today(),
    )
    .expect("valid schedule")
}

fn in_status(status: WorkoutStatus) -> ScheduledWorkout {
    let now = clock().utc();
    let scheduled = scheduled_on(today());
    match status {
        WorkoutStatus::Scheduled => scheduled,
        WorkoutStatus::InProgress => scheduled.start(now).expect("start"),
        WorkoutStatus::Completed => scheduled
            .start(now)
            .and_then(|started| {
                started.complete(
                    CompletionInput {
                        calories_burned: None,
                        rating: 4,
                        actual_duration_minutes: Some(30),
                    },
                    now,
                )
            })
            .expect("complete"),
        WorkoutStatus::Cancelled => scheduled.cancel().expect("cancel"),
    }
}

fn returning(workout: ScheduledWorkout) -> MockScheduledWorkoutRepository {
    let mut repo = MockScheduledWorkoutRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(workout)));
    repo
}

fn completion(workout_id: Uuid, rating: i64) -> CompleteWorkoutRequest {
    CompleteWorkoutRequest {
        workout_id,
        expected_version: None,
        calories_burned: Some(320),
        rating,
        actual_duration_minutes: None,
    }
}

#[fixture]
fn scheduled_today() -> ScheduledWorkout {
    in_status(WorkoutStatus::Scheduled)
}

#[rstest]
#[tokio::test]
async fn start_persists_against_read_version(scheduled_today: ScheduledWorkout) {
    let workout_id = scheduled_today.id();
    let mut repo = returning(scheduled_today);
    repo.expect_update()
        .withf(|workout, expected| {
            workout.status() == WorkoutStatus::InProgress && workout.version() == 1 && *expected == 0
        })
        .times(1)
        .return_once(|_, _| Ok(()));

    let payload = mock_service(repo, MockWorkoutPlanRepository::new())
        .start(WorkoutTransitionRequest::new(workout_id))
        .await
        .expect("start succeeds");

    assert_eq!(payload.status, WorkoutStatus::InProgress);
    assert_eq!(payload.started_at, Some(clock().utc()));
    assert!(payload.is_today);
    assert_eq!(payload.eligible_action, EligibleAction::Complete);
}

#[tokio::test]
async fn unknown_workout_is_not_found() {
    let mut repo = MockScheduledWorkoutRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_update().times(0);

    let error = mock_service(repo, MockWorkoutPlanRepository::new())
        .cancel(WorkoutTransitionRequest::new(Uuid::new_v4()))
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case::start_twice(WorkoutStatus::InProgress, WorkoutAction::Start)]
#[case::start_completed(WorkoutStatus::Completed, WorkoutAction::Start)]
#[case::cancel_cancelled(WorkoutStatus::Cancelled, WorkoutAction::Cancel)]
#[case::cancel_completed(WorkoutStatus::Completed, WorkoutAction::Cancel)]
#[tokio::test]
async fn illegal_transitions_map_to_conflict(
    #[case] status: WorkoutStatus,
    #[case] action: WorkoutAction,
) {
    let workout = in_status(status);
    let workout_id = workout.id();
    let mut repo = returning(workout);
    repo.expect_update().times(0);
    let service = mock_service(repo, MockWorkoutPlanRepository::new());

    let request = WorkoutTransitionRequest::new(workout_id);
    let result = match action {
        WorkoutAction::Start => service.start(request).await,
        _ => service.cancel(request).await,
    };
    let error = result.expect_err("invalid transition");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(
        error.details(),
        Some(&json!({
            "status": status,
            "action": action,
            "code": "invalid_transition",
        }))
    );
}

#[tokio::test]
async fn complete_validates_rating_for_in_progress_workouts() {
    let workout = in_status(WorkoutStatus::InProgress);
    let workout_id = workout.id();
    let mut repo = returning(workout);
    repo.expect_update().times(0);

    let error = mock_service(repo, MockWorkoutPlanRepository::new())
        .complete(completion(workout_id, 6))
        .await
        .expect_err("rating out of range");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "rating must be between 1 and 5 (got 6)");
}

#[rstest]
#[tokio::test]
async fn complete_checks_status_before_rating(scheduled_today: ScheduledWorkout) {
    let workout_id = scheduled_today.id();
    let mut repo = returning(scheduled_today);
    repo.expect_update().times(0);

    let error = mock_service(repo, MockWorkoutPlanRepository::new())
        .complete(completion(workout_id, 6))
        .await
        .expect_err("not in progress");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn complete_records_outcome() {
    let workout = in_status(WorkoutStatus::InProgress);
    let workout_id = workout.id();
    let mut repo = returning(workout);
    repo.expect_update()
        .withf(|_, expected| *expected == 1)
        .times(1)
        .return_once(|_, _| Ok(()));

    let payload = mock_service(repo, MockWorkoutPlanRepository::new())
        .complete(completion(workout_id, 5))
        .await
        .expect("complete succeeds");

    assert_eq!(payload.status, WorkoutStatus::Completed);
    assert_eq!(payload.rating, Some(5));
    assert_eq!(payload.calories_burned, Some(320));
    assert_eq!(payload.actual_duration_minutes, Some(0));
    assert_eq!(payload.eligible_action, EligibleAction::None);
}

#[rstest]
#[tokio::test]
async fn stale_expected_version_is_rejected_without_writing(scheduled_today: ScheduledWorkout) {
    let workout_id = scheduled_today.id();
    let mut repo = returning(scheduled_today);
    repo.expect_update().times(0);

    let error = mock_service(repo, MockWorkoutPlanRepository::new())
        .start(WorkoutTransitionRequest {
            workout_id,
            expected_version: Some(3),
        })
        .await
        .expect_err("stale version");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(
        error.details(),
        Some(&json!({
            "expectedVersion": 3,
            "actualVersion": 0,
            "code": "version_mismatch",
        }))
    );
}

#[rstest]
#[case::version(
    ScheduledWorkoutRepositoryError::version_conflict(Uuid::nil(), 0_u64),
    ErrorCode::Conflict
)]
#[case::connection(
    ScheduledWorkoutRepositoryError::connection("pool unavailable"),
    ErrorCode::ServiceUnavailable
)]
#[case::query(
    ScheduledWorkoutRepositoryError::query("constraint violated"),
    ErrorCode::InternalError
)]
#[tokio::test]
async fn update_failures_are_mapped(
    scheduled_today: ScheduledWorkout,
    #[case] failure: ScheduledWorkoutRepositoryError,
    #[case] expected: ErrorCode,
) {
    let workout_id = scheduled_today.id();
    let mut repo = returning(scheduled_today);
    repo.expect_update()
        .times(1)
        .return_once(move |_, _| Err(failure));

    let error = mock_service(repo, MockWorkoutPlanRepository::new())
        .cancel(WorkoutTransitionRequest::new(workout_id))
        .await
        .expect_err("update fails");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn schedule_copies_owner_from_plan() {
    let owner = UserId::random();
    let plan = leg_day_plan(&owner);
    let plan_id = plan.id();
    let mut plans = MockWorkoutPlanRepository::new();
    plans
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(plan)));
    let mut workouts = MockScheduledWorkoutRepository::new();
    workouts.expect_insert().times(1).return_once(|_| Ok(()));

    let tomorrow = today().succ_opt().expect("valid date");
    let payload = mock_service(workouts, plans)
        .schedule(ScheduleWorkoutRequest {
            plan_id,
            scheduled_date: tomorrow,
            scheduled_time: Some(seven_am()),
        })
        .await
        .expect("schedule succeeds");

    assert_eq!(payload.user_id, owner);
    assert_eq!(payload.plan_id, plan_id);
    assert_eq!(payload.status, WorkoutStatus::Scheduled);
    assert_eq!(payload.version, 0);
    assert!(!payload.is_today);
    assert_eq!(payload.eligible_action, EligibleAction::None);
}

#[tokio::test]
async fn schedule_rejects_unknown_plan() {
    let mut plans = MockWorkoutPlanRepository::new();
    plans.expect_find_by_id().times(1).return_once(|_| Ok(None));
    let mut workouts = MockScheduledWorkoutRepository::new();
    workouts.expect_insert().times(0);

    let error = mock_service(workouts, plans)
        .schedule(ScheduleWorkoutRequest {
            plan_id: Uuid::new_v4(),
            scheduled_date: today(),
            scheduled_time: Some(seven_am()),
        })
        .await
        .expect_err("unknown plan");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case::past_date(today().pred_opt().expect("valid date"), Some(seven_am()))]
#[case::missing_time(today(), None)]
#[tokio::test]
async fn schedule_rejects_invalid_slots(
    #[case] scheduled_date: NaiveDate,
    #[case] scheduled_time: Option<NaiveTime>,
) {
    let plan = leg_day_plan(&UserId::random());
    let plan_id = plan.id();
    let mut plans = MockWorkoutPlanRepository::new();
    plans
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(plan)));
    let mut workouts = MockScheduledWorkoutRepository::new();
    workouts.expect_insert().times(0);

    let error = mock_service(workouts, plans)
        .schedule(ScheduleWorkoutRequest {
            plan_id,
            scheduled_date,
            scheduled_time,
        })
        .await
        .expect_err("invalid slot");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn schedule_maps_plan_store_outage() {
    let mut plans = MockWorkoutPlanRepository::new();
    plans
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(WorkoutPlanRepositoryError::connection("down")));

    let error = mock_service(MockScheduledWorkoutRepository::new(), plans)
        .schedule(ScheduleWorkoutRequest {
            plan_id: Uuid::new_v4(),
            scheduled_date: today(),
            scheduled_time: Some(seven_am()),
        })
        .await
        .expect_err("plan store unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[case::in_progress(WorkoutStatus::InProgress, Some(seven_am()), ErrorCode::Conflict)]
#[case::completed(WorkoutStatus::Completed, Some(seven_am()), ErrorCode::Conflict)]
#[case::cancelled(WorkoutStatus::Cancelled, Some(seven_am()), ErrorCode::Conflict)]
#[case::missing_time(WorkoutStatus::Scheduled, None, ErrorCode::InvalidRequest)]
#[tokio::test]
async fn reschedule_failures(
    #[case] status: WorkoutStatus,
    #[case] scheduled_time: Option<NaiveTime>,
    #[case] expected: ErrorCode,
) {
    let workout = in_status(status);
    let workout_id = workout.id();
    let mut repo = returning(workout);
    repo.expect_update().times(0);

    let error = mock_service(repo, MockWorkoutPlanRepository::new())
        .reschedule(RescheduleWorkoutRequest {
            workout_id,
            expected_version: None,
            scheduled_date: today(),
            scheduled_time,
        })
        .await
        .expect_err("reschedule rejected");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn reschedule_moves_date_and_keeps_status(scheduled_today: ScheduledWorkout) {
    let workout_id = scheduled_today.id();
    let mut repo = returning(scheduled_today);
    repo.expect_update().times(1).return_once(|_, _| Ok(()));
    let next_week = today() + chrono::Days::new(7);
    let evening = NaiveTime::from_hms_opt(18, 30, 0).expect("valid time");

    let payload = mock_service(repo, MockWorkoutPlanRepository::new())
        .reschedule(RescheduleWorkoutRequest {
            workout_id,
            expected_version: Some(0),
            scheduled_date: next_week,
            scheduled_time: Some(evening),
        })
        .await
        .expect("reschedule succeeds");

    assert_eq!(payload.status, WorkoutStatus::Scheduled);
    assert_eq!(payload.scheduled_date, next_week);
    assert_eq!(payload.scheduled_time, evening);
    assert_eq!(payload.eligible_action, EligibleAction::None);
}

#[tokio::test]
async fn list_workouts_derives_today_flags() {
    let due = in_status(WorkoutStatus::Scheduled);
    let later = scheduled_on(today().succ_opt().expect("valid date"));
    let mut repo = MockScheduledWorkoutRepository::new();
    repo.expect_list_for_user()
        .times(1)
        .return_once(move |_| Ok(vec![due, later]));

    let payloads = mock_service(repo, MockWorkoutPlanRepository::new())
        .list_workouts(UserId::random())
        .await
        .expect("list succeeds");

    let flags: Vec<(bool, EligibleAction)> = payloads
        .iter()
        .map(|payload| (payload.is_today, payload.eligible_action))
        .collect();
    assert_eq!(
        flags,
        [(true, EligibleAction::Start), (false, EligibleAction::None)]
    );
}

struct Harness {
    service: Arc<
        WorkoutLifecycleService<InMemoryScheduledWorkoutRepository, InMemoryWorkoutPlanRepository>,
    >,
    workout_id: Uuid,
}

async fn harness() -> Harness {
    let plans = Arc::new(InMemoryWorkoutPlanRepository::new());
    let plan = leg_day_plan(&UserId::random());
    plans.save(&plan).await.expect("plan saved");
    let service = Arc::new(WorkoutLifecycleService::new(
        Arc::new(InMemoryScheduledWorkoutRepository::new()),
        plans,
        clock(),
    ));
    let scheduled = service
        .schedule(ScheduleWorkoutRequest {
            plan_id: plan.id(),
            scheduled_date: today(),
            scheduled_time: Some(seven_am()),
        })
        .await
        .expect("scheduled");
    Harness {
        service,
        workout_id: scheduled.id,
    }
}

fn outcome_codes(
    results: [Result<ScheduledWorkoutPayload, Error>; 2],
) -> (usize, Vec<ErrorCode>) {
    let successes = results.iter().filter(|result| result.is_ok()).count();
    let failures = results
        .iter()
        .filter_map(|result| result.as_ref().err().map(Error::code))
        .collect();
    (successes, failures)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_start_and_cancel_on_one_version_yield_one_winner() {
    for _ in 0..25 {
        let Harness {
            service,
            workout_id,
        } = harness().await;
        let request = WorkoutTransitionRequest {
            workout_id,
            expected_version: Some(0),
        };

        let starter = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.start(request).await })
        };
        let canceller = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.cancel(request).await })
        };
        let results = [
            starter.await.expect("start task"),
            canceller.await.expect("cancel task"),
        ];
        let loser_detail = results
            .iter()
            .find_map(|result| result.as_ref().err())
            .and_then(Error::details)
            .and_then(|details| details.get("code"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);

        assert_eq!(
            outcome_codes(results),
            (1, vec![ErrorCode::Conflict]),
            "exactly one transition wins"
        );
        assert_eq!(loser_detail.as_deref(), Some("version_mismatch"));
        let stored = service.get_workout(workout_id).await.expect("stored");
        assert_eq!(stored.version, 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_starts_yield_one_winner() {
    let Harness {
        service,
        workout_id,
    } = harness().await;

    let request = WorkoutTransitionRequest::new(workout_id);
    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.start(request).await })
    };
    let second = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.start(request).await })
    };
    let results = [
        first.await.expect("first task"),
        second.await.expect("second task"),
    ];

    assert_eq!(outcome_codes(results), (1, vec![ErrorCode::Conflict]));
}

#[tokio::test]
async fn cancel_after_start_is_a_legal_sequence() {
    let Harness {
        service,
        workout_id,
    } = harness().await;

    service
        .start(WorkoutTransitionRequest::new(workout_id))
        .await
        .expect("start succeeds");
    let cancelled = service
        .cancel(WorkoutTransitionRequest::new(workout_id))
        .await
        .expect("cancel succeeds");

    assert_eq!(cancelled.status, WorkoutStatus::Cancelled);
    assert_eq!(cancelled.version, 2);
}
