use sqlx::PgPool;
use tracing::info;

use crate::error::AppError;
use crate::models::{CreateMember, Member, UpdateMember};

const MEMBER_COLUMNS: &str = "id, name, email, join_date, membership_type, active";

#[derive(Clone)]
pub struct MemberService {
    db: PgPool,
}

impl MemberService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_member(&self, member_data: CreateMember) -> Result<Member, AppError> {
        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            INSERT INTO members (name, email, membership_type)
            VALUES ($1, $2, $3)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(&member_data.name)
        .bind(&member_data.email)
        .bind(&member_data.membership_type)
        .fetch_one(&self.db)
        .await?;

        info!(member_id = member.id, "created member");
        Ok(member)
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(members)
    }

    pub async fn get_member_by_id(&self, member_id: i32) -> Result<Option<Member>, AppError> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
        ))
        .bind(member_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn member_exists(&self, member_id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE id = $1)")
                .bind(member_id)
                .fetch_one(&self.db)
                .await?;

        Ok(exists)
    }

    /// Read, merge and write back within one transaction.
    pub async fn update_member(
        &self,
        member_id: i32,
        changes: UpdateMember,
    ) -> Result<Option<Member>, AppError> {
        let mut tx = self.db.begin().await?;

        let existing = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
        ))
        .bind(member_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut member) = existing else {
            return Ok(None);
        };
        member.apply(changes);

        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            UPDATE members
            SET name = $2,
                email = $3,
                membership_type = $4,
                active = $5
            WHERE id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.membership_type)
        .bind(member.active)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(member))
    }

    /// Removes the member together with its workout sessions.
    pub async fn delete_member(&self, member_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(member_id)
            .execute(&self.db)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(member_id, "deleted member");
        }
        Ok(deleted)
    }
}
