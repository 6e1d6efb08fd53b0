use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::members::{create_member, delete_member, get_member, list_members, update_member};
use super::workouts::{create_workout, list_member_workouts, update_workout};
use crate::services::{MemberService, WorkoutSessionService};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub member_service: MemberService,
    pub workout_session_service: WorkoutSessionService,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            member_service: MemberService::new(db.clone()),
            workout_session_service: WorkoutSessionService::new(db.clone()),
            db,
        }
    }
}

pub fn create_routes(db: PgPool) -> Router {
    let shared_state = AppState::new(db);

    Router::new()
        .route("/health", get(health_check))
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/:id/workouts", get(list_member_workouts))
        .route("/workouts", post(create_workout))
        .route("/workouts/:id", put(update_workout))
        .with_state(shared_state)
        .layer(TraceLayer::new_for_http())
}
