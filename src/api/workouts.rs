use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::AppState;
use crate::error::AppError;
use crate::models::{
    CreateWorkoutSession, CreateWorkoutSessionRequest, UpdateWorkoutSession,
    UpdateWorkoutSessionRequest, WorkoutSession,
};

/// Record a workout session for an existing member
pub async fn create_workout(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutSessionRequest>, AppError>,
) -> Result<(StatusCode, Json<WorkoutSession>), AppError> {
    let session_data = CreateWorkoutSession::try_from(request)?;

    if !state.member_service.member_exists(session_data.member_id).await? {
        return Err(AppError::NotFound);
    }

    let session = state
        .workout_session_service
        .create_session(session_data)
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn list_member_workouts(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Vec<WorkoutSession>>, AppError> {
    if !state.member_service.member_exists(member_id).await? {
        return Err(AppError::NotFound);
    }

    let sessions = state
        .workout_session_service
        .get_sessions_by_member_id(member_id)
        .await?;

    Ok(Json(sessions))
}

/// Overwrite the fields present in the body, re-parsing `date` if given
pub async fn update_workout(
    State(state): State<AppState>,
    WithRejection(Path(session_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateWorkoutSessionRequest>, AppError>,
) -> Result<Json<WorkoutSession>, AppError> {
    let changes = UpdateWorkoutSession::try_from(request)?;

    let session = state
        .workout_session_service
        .update_session(session_id, changes)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(session))
}
