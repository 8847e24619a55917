//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;

use workouts_backend::Trace;
#[cfg(debug_assertions)]
use workouts_backend::doc::ApiDoc;
use workouts_backend::domain::{WorkoutLifecycleService, WorkoutPlanService};
use workouts_backend::inbound::http::health::{HealthState, live, ready};
use workouts_backend::inbound::http::scheduled_workouts::{
    cancel_workout, complete_workout, get_scheduled_workout, list_scheduled_workouts,
    reschedule_workout, schedule_workout, start_workout,
};
use workouts_backend::inbound::http::state::HttpState;
use workouts_backend::inbound::http::workout_plans::{
    create_workout_plan, get_workout_plan, list_workout_plans,
};
use workouts_backend::outbound::memory::{
    InMemoryScheduledWorkoutRepository, InMemoryWorkoutPlanRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the plan and lifecycle services over the in-memory stores.
///
/// Both services share the plan store so scheduling sees every created
/// plan.
fn build_http_state(clock: Arc<dyn Clock>) -> HttpState {
    let plans = Arc::new(InMemoryWorkoutPlanRepository::new());
    let workouts = Arc::new(InMemoryScheduledWorkoutRepository::new());
    let plan_service = Arc::new(WorkoutPlanService::new(plans.clone(), clock.clone()));
    let lifecycle = Arc::new(WorkoutLifecycleService::new(workouts, plans, clock));
    HttpState::new(plan_service.clone(), plan_service, lifecycle.clone(), lifecycle)
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(create_workout_plan)
        .service(list_workout_plans)
        .service(get_workout_plan)
        .service(schedule_workout)
        .service(list_scheduled_workouts)
        .service(get_scheduled_workout)
        .service(start_workout)
        .service(complete_workout)
        .service(cancel_workout)
        .service(reschedule_workout);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and settings.
///
/// Every worker shares one [`HttpState`], so the in-memory stores and the
/// per-workout locks are process-wide.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(Arc::new(DefaultClock)));
    let bind_addr = settings.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr.clone())?
    .run();

    info!(host = %bind_addr.0, port = bind_addr.1, "server listening");
    health_state.mark_ready();
    Ok(server)
}
