use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::patch::{non_null, nullable};
use crate::error::AppError;

/// The only accepted input format for session dates.
pub const SESSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: i32,
    pub member_id: i32,
    pub date: NaiveDateTime,
    pub workout_type: String,
    pub duration: Option<i32>,
    pub trainer: Option<String>,
    pub notes: Option<String>,
}

/// Body of `POST /workouts`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWorkoutSessionRequest {
    pub member_id: i32,
    pub date: String,
    pub workout_type: String,
    pub duration: i32,
    pub trainer: Option<String>,
    pub notes: Option<String>,
}

/// Body of `PUT /workouts/{id}`. `member_id` is deliberately not accepted.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateWorkoutSessionRequest {
    #[serde(default, deserialize_with = "non_null")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub workout_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub duration: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub trainer: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<Option<String>>,
}

/// A validated session ready to insert.
#[derive(Debug, Clone)]
pub struct CreateWorkoutSession {
    pub member_id: i32,
    pub date: NaiveDateTime,
    pub workout_type: String,
    pub duration: Option<i32>,
    pub trainer: Option<String>,
    pub notes: Option<String>,
}

/// Validated changes for an existing session.
#[derive(Debug, Default, Clone)]
pub struct UpdateWorkoutSession {
    pub date: Option<NaiveDateTime>,
    pub workout_type: Option<String>,
    pub duration: Option<Option<i32>>,
    pub trainer: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

pub fn parse_session_date(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw, SESSION_DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!(
            "time data '{}' does not match format '{}'",
            raw, SESSION_DATE_FORMAT
        ))
    })
}

impl TryFrom<CreateWorkoutSessionRequest> for CreateWorkoutSession {
    type Error = AppError;

    fn try_from(request: CreateWorkoutSessionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: request.member_id,
            date: parse_session_date(&request.date)?,
            workout_type: request.workout_type,
            duration: Some(request.duration),
            trainer: request.trainer,
            notes: request.notes,
        })
    }
}

impl TryFrom<UpdateWorkoutSessionRequest> for UpdateWorkoutSession {
    type Error = AppError;

    fn try_from(request: UpdateWorkoutSessionRequest) -> Result<Self, Self::Error> {
        let date = request.date.as_deref().map(parse_session_date).transpose()?;

        Ok(Self {
            date,
            workout_type: request.workout_type,
            duration: request.duration,
            trainer: request.trainer,
            notes: request.notes,
        })
    }
}

impl WorkoutSession {
    /// Overwrite the fields present in `changes`, leaving the rest untouched.
    pub fn apply(&mut self, changes: UpdateWorkoutSession) {
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(workout_type) = changes.workout_type {
            self.workout_type = workout_type;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
        if let Some(trainer) = changes.trainer {
            self.trainer = trainer;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
    }
}
