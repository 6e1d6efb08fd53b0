use sqlx::PgPool;
use tracing::info;

use crate::error::AppError;
use crate::models::{CreateWorkoutSession, UpdateWorkoutSession, WorkoutSession};

const SESSION_COLUMNS: &str = "id, member_id, date, workout_type, duration, trainer, notes";

#[derive(Clone)]
pub struct WorkoutSessionService {
    db: PgPool,
}

impl WorkoutSessionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_session(
        &self,
        session_data: CreateWorkoutSession,
    ) -> Result<WorkoutSession, AppError> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            r#"
            INSERT INTO workout_sessions (member_id, date, workout_type, duration, trainer, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session_data.member_id)
        .bind(session_data.date)
        .bind(&session_data.workout_type)
        .bind(session_data.duration)
        .bind(&session_data.trainer)
        .bind(&session_data.notes)
        .fetch_one(&self.db)
        .await?;

        info!(
            session_id = session.id,
            member_id = session.member_id,
            "created workout session"
        );
        Ok(session)
    }

    pub async fn get_sessions_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<WorkoutSession>, AppError> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM workout_sessions WHERE member_id = $1 ORDER BY id"
        ))
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }

    /// Read, merge and write back within one transaction.
    pub async fn update_session(
        &self,
        session_id: i32,
        changes: UpdateWorkoutSession,
    ) -> Result<Option<WorkoutSession>, AppError> {
        let mut tx = self.db.begin().await?;

        let existing = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM workout_sessions WHERE id = $1"
        ))
        .bind(session_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut session) = existing else {
            return Ok(None);
        };
        session.apply(changes);

        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            r#"
            UPDATE workout_sessions
            SET date = $2,
                workout_type = $3,
                duration = $4,
                trainer = $5,
                notes = $6
            WHERE id = $1
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session.id)
        .bind(session.date)
        .bind(&session.workout_type)
        .bind(session.duration)
        .bind(&session.trainer)
        .bind(&session.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(session))
    }
}
