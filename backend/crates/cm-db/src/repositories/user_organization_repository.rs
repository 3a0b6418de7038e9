use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cm_core::UserOrganization;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

/// Membership links. The (user, organization) pair is the primary key,
/// so a user can hold at most one role per organization.
pub struct UserOrganizationRepository {
    pool: SqlitePool,
}

impl UserOrganizationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(conn: &mut SqliteConnection, link: &UserOrganization) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO user_organizations (
                    user_id, organization_id, role_id, is_default, created_at
                ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(link.user_id.to_string())
        .bind(link.organization_id.to_string())
        .bind(link.role_id.to_string())
        .bind(link.is_default)
        .bind(link.created_at.timestamp())
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn find(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> DbErrorResult<Option<UserOrganization>> {
        let row = sqlx::query(
            "SELECT * FROM user_organizations WHERE user_id = ? AND organization_id = ?",
        )
        .bind(user_id.to_string())
        .bind(organization_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_link).transpose()
    }

    pub async fn find_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<UserOrganization>> {
        let rows = sqlx::query("SELECT * FROM user_organizations WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_link).collect()
    }

    pub async fn find_for_organization(
        &self,
        organization_id: Uuid,
    ) -> DbErrorResult<Vec<UserOrganization>> {
        let rows = sqlx::query("SELECT * FROM user_organizations WHERE organization_id = ?")
            .bind(organization_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_link).collect()
    }

    /// Make `organization_id` the user's default, clearing any previous
    /// default. Runs on a connection so the two updates share a
    /// transaction.
    pub async fn set_default(
        conn: &mut SqliteConnection,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> DbErrorResult<()> {
        sqlx::query("UPDATE user_organizations SET is_default = 0 WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
                UPDATE user_organizations SET is_default = 1
                WHERE user_id = ? AND organization_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(organization_id.to_string())
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn update_role(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        role_id: Uuid,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE user_organizations SET role_id = ?
                WHERE user_id = ? AND organization_id = ?
            "#,
        )
        .bind(role_id.to_string())
        .bind(user_id.to_string())
        .bind(organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, user_id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM user_organizations WHERE user_id = ? AND organization_id = ?")
            .bind(user_id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_link(row: &SqliteRow) -> DbErrorResult<UserOrganization> {
    let user_id: String = row.try_get("user_id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let role_id: String = row.try_get("role_id")?;

    Ok(UserOrganization {
        user_id: parse_uuid(&user_id, "user_organizations.user_id")?,
        organization_id: parse_uuid(&organization_id, "user_organizations.organization_id")?,
        role_id: parse_uuid(&role_id, "user_organizations.role_id")?,
        is_default: row.try_get("is_default")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "user_organizations.created_at")?,
    })
}
