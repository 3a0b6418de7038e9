use crate::{DbError, Result as DbErrorResult};
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cm_core::{ErrorLocation, PermissionSet, Role};

use std::panic::Location;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a role. Takes a connection so organization registration
    /// can seed the default role set transactionally.
    pub async fn create(conn: &mut SqliteConnection, role: &Role) -> DbErrorResult<()> {
        let permissions = permissions_json(&role.permissions)?;

        sqlx::query(
            r#"
                INSERT INTO roles (
                    id, organization_id, name, description, permissions,
                    is_system, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(role.id.to_string())
        .bind(role.organization_id.to_string())
        .bind(&role.name)
        .bind(&role.description)
        .bind(permissions)
        .bind(role.is_system)
        .bind(role.created_at.timestamp())
        .bind(role.updated_at.timestamp())
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query("SELECT * FROM roles WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_role).transpose()
    }

    pub async fn find_by_name(
        &self,
        organization_id: Uuid,
        name: &str,
    ) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query("SELECT * FROM roles WHERE organization_id = ? AND name = ?")
            .bind(organization_id.to_string())
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_role).transpose()
    }

    pub async fn find_all(&self, organization_id: Uuid) -> DbErrorResult<Vec<Role>> {
        let rows = sqlx::query("SELECT * FROM roles WHERE organization_id = ? ORDER BY name")
            .bind(organization_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_role).collect()
    }

    pub async fn update(&self, role: &Role) -> DbErrorResult<()> {
        let permissions = permissions_json(&role.permissions)?;

        sqlx::query(
            r#"
                UPDATE roles
                SET name = ?, description = ?, permissions = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(&role.name)
        .bind(&role.description)
        .bind(permissions)
        .bind(role.updated_at.timestamp())
        .bind(role.id.to_string())
        .bind(role.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM roles WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn permissions_json(permissions: &PermissionSet) -> DbErrorResult<String> {
    serde_json::to_string(&permissions.as_strings()).map_err(|e| DbError::Initialization {
        message: format!("Cannot serialize role permissions: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn map_role(row: &SqliteRow) -> DbErrorResult<Role> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let permissions_raw: String = row.try_get("permissions")?;

    let permission_strings: Vec<String> =
        serde_json::from_str(&permissions_raw).map_err(|e| DbError::Initialization {
            message: format!("Invalid JSON in roles.permissions: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let permissions =
        PermissionSet::from_strings(&permission_strings).map_err(|e| DbError::Initialization {
            message: format!("Invalid permission in roles.permissions: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Role {
        id: parse_uuid(&id, "roles.id")?,
        organization_id: parse_uuid(&organization_id, "roles.organization_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        permissions,
        is_system: row.try_get("is_system")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "roles.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "roles.updated_at")?,
    })
}
