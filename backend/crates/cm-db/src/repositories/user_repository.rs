use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_opt_timestamp, parse_timestamp, parse_uuid};

use cm_core::User;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. Takes a connection so registration can create the
    /// user and its membership link in one transaction.
    pub async fn create(conn: &mut SqliteConnection, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, first_name, last_name, phone,
                    is_super_admin, is_active, failed_login_attempts,
                    locked_until, last_login_at, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.is_super_admin)
        .bind(user.is_active)
        .bind(user.failed_login_attempts)
        .bind(user.locked_until.map(|dt| dt.timestamp()))
        .bind(user.last_login_at.map(|dt| dt.timestamp()))
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Bump the failed-attempt counter, locking the account when the
    /// caller has decided the threshold is reached.
    pub async fn record_failed_login(
        &self,
        id: Uuid,
        attempts: i32,
        locked_until: Option<DateTime<Utc>>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users
                SET failed_login_attempts = ?, locked_until = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(attempts)
        .bind(locked_until.map(|dt| dt.timestamp()))
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Reset lockout state and stamp the last successful login
    pub async fn record_successful_login(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users
                SET failed_login_attempts = 0, locked_until = NULL,
                    last_login_at = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(at.timestamp())
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;

    Ok(User {
        id: parse_uuid(&id, "users.id")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        phone: row.try_get("phone")?,
        is_super_admin: row.try_get("is_super_admin")?,
        is_active: row.try_get("is_active")?,
        failed_login_attempts: row.try_get("failed_login_attempts")?,
        locked_until: parse_opt_timestamp(row.try_get("locked_until")?, "users.locked_until")?,
        last_login_at: parse_opt_timestamp(row.try_get("last_login_at")?, "users.last_login_at")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "users.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "users.updated_at")?,
    })
}
