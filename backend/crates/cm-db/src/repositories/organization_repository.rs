//! Organization repository.
//!
//! Organizations are the tenant boundary itself, so unlike every other
//! repository these queries are not tenant-filtered.

use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_enum, parse_opt_timestamp, parse_timestamp, parse_uuid};

use cm_core::Organization;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

pub struct OrganizationRepository {
    pool: SqlitePool,
}

impl OrganizationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new organization. Takes a connection so registration
    /// can create the organization, roles and founder in one transaction.
    pub async fn create(
        conn: &mut SqliteConnection,
        organization: &Organization,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO organizations (
                    id, name, code, subdomain, plan, is_active, max_users,
                    trial_ends_at, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(organization.id.to_string())
        .bind(&organization.name)
        .bind(&organization.code)
        .bind(&organization.subdomain)
        .bind(organization.plan.as_str())
        .bind(organization.is_active)
        .bind(organization.max_users)
        .bind(organization.trial_ends_at.map(|dt| dt.timestamp()))
        .bind(organization.created_at.timestamp())
        .bind(organization.updated_at.timestamp())
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Organization>> {
        let row = sqlx::query("SELECT * FROM organizations WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_organization).transpose()
    }

    pub async fn find_by_subdomain(&self, subdomain: &str) -> DbErrorResult<Option<Organization>> {
        let row = sqlx::query("SELECT * FROM organizations WHERE subdomain = ?")
            .bind(subdomain)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_organization).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Organization>> {
        let rows = sqlx::query("SELECT * FROM organizations ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_organization).collect()
    }

    pub async fn update(&self, organization: &Organization) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE organizations
                SET name = ?, code = ?, subdomain = ?, plan = ?, is_active = ?,
                    max_users = ?, trial_ends_at = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&organization.name)
        .bind(&organization.code)
        .bind(&organization.subdomain)
        .bind(organization.plan.as_str())
        .bind(organization.is_active)
        .bind(organization.max_users)
        .bind(organization.trial_ends_at.map(|dt| dt.timestamp()))
        .bind(organization.updated_at.timestamp())
        .bind(organization.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Number of member accounts, for the max_users limit
    pub async fn count_members(&self, organization_id: Uuid) -> DbErrorResult<i64> {
        let row =
            sqlx::query("SELECT COUNT(*) AS n FROM user_organizations WHERE organization_id = ?")
                .bind(organization_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(row.try_get("n")?)
    }
}

fn map_organization(row: &SqliteRow) -> DbErrorResult<Organization> {
    let id: String = row.try_get("id")?;
    let plan: String = row.try_get("plan")?;

    Ok(Organization {
        id: parse_uuid(&id, "organizations.id")?,
        name: row.try_get("name")?,
        code: row.try_get("code")?,
        subdomain: row.try_get("subdomain")?,
        plan: parse_enum(&plan, "organizations.plan")?,
        is_active: row.try_get("is_active")?,
        max_users: row.try_get("max_users")?,
        trial_ends_at: parse_opt_timestamp(
            row.try_get("trial_ends_at")?,
            "organizations.trial_ends_at",
        )?,
        created_at: parse_timestamp(row.try_get("created_at")?, "organizations.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "organizations.updated_at")?,
    })
}
