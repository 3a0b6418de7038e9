use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cm_core::Team;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, team: &Team) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO teams (
                    id, organization_id, name, category, season, coach_name,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(team.id.to_string())
        .bind(team.organization_id.to_string())
        .bind(&team.name)
        .bind(&team.category)
        .bind(&team.season)
        .bind(&team.coach_name)
        .bind(team.created_at.timestamp())
        .bind(team.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<Option<Team>> {
        let row = sqlx::query("SELECT * FROM teams WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_team).transpose()
    }

    pub async fn find_all(&self, organization_id: Uuid) -> DbErrorResult<Vec<Team>> {
        let rows = sqlx::query("SELECT * FROM teams WHERE organization_id = ? ORDER BY name")
            .bind(organization_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_team).collect()
    }

    pub async fn count(&self, organization_id: Uuid) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM teams WHERE organization_id = ?")
            .bind(organization_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }

    pub async fn update(&self, team: &Team) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE teams
                SET name = ?, category = ?, season = ?, coach_name = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(&team.name)
        .bind(&team.category)
        .bind(&team.season)
        .bind(&team.coach_name)
        .bind(team.updated_at.timestamp())
        .bind(team.id.to_string())
        .bind(team.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM teams WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_team(row: &SqliteRow) -> DbErrorResult<Team> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;

    Ok(Team {
        id: parse_uuid(&id, "teams.id")?,
        organization_id: parse_uuid(&organization_id, "teams.organization_id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        season: row.try_get("season")?,
        coach_name: row.try_get("coach_name")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "teams.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "teams.updated_at")?,
    })
}
