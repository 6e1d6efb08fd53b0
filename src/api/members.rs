use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::AppState;
use crate::error::AppError;
use crate::models::{CreateMember, Member, UpdateMember};

/// Register a new member
pub async fn create_member(
    State(state): State<AppState>,
    WithRejection(Json(member_data), _): WithRejection<Json<CreateMember>, AppError>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    let member = state.member_service.create_member(member_data).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// List every member
pub async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, AppError> {
    let members = state.member_service.list_members().await?;

    Ok(Json(members))
}

pub async fn get_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Member>, AppError> {
    let member = state
        .member_service
        .get_member_by_id(member_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(member))
}

/// Overwrite the fields present in the body
pub async fn update_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(changes), _): WithRejection<Json<UpdateMember>, AppError>,
) -> Result<Json<Member>, AppError> {
    let member = state
        .member_service
        .update_member(member_id, changes)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(member))
}

/// Delete a member and, through the foreign key, its workout sessions
pub async fn delete_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<StatusCode, AppError> {
    if !state.member_service.delete_member(member_id).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
