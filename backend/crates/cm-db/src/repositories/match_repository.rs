use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_enum, parse_timestamp, parse_uuid};

use cm_core::Match;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct MatchRepository {
    pool: SqlitePool,
}

impl MatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, fixture: &Match) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO matches (
                    id, organization_id, team_id, opponent, venue, is_home,
                    kickoff_at, status, home_score, away_score,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(fixture.id.to_string())
        .bind(fixture.organization_id.to_string())
        .bind(fixture.team_id.to_string())
        .bind(&fixture.opponent)
        .bind(&fixture.venue)
        .bind(fixture.is_home)
        .bind(fixture.kickoff_at.timestamp())
        .bind(fixture.status.as_str())
        .bind(fixture.home_score)
        .bind(fixture.away_score)
        .bind(fixture.created_at.timestamp())
        .bind(fixture.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Match>> {
        let row = sqlx::query("SELECT * FROM matches WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_match).transpose()
    }

    pub async fn find_all(&self, organization_id: Uuid) -> DbErrorResult<Vec<Match>> {
        let rows =
            sqlx::query("SELECT * FROM matches WHERE organization_id = ? ORDER BY kickoff_at DESC")
                .bind(organization_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(map_match).collect()
    }

    /// Scheduled fixtures kicking off at or after `after`
    pub async fn find_upcoming(
        &self,
        organization_id: Uuid,
        after: DateTime<Utc>,
    ) -> DbErrorResult<Vec<Match>> {
        let rows = sqlx::query(
            r#"
                SELECT * FROM matches
                WHERE organization_id = ? AND status = 'scheduled' AND kickoff_at >= ?
                ORDER BY kickoff_at
            "#,
        )
        .bind(organization_id.to_string())
        .bind(after.timestamp())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_match).collect()
    }

    pub async fn count_upcoming(
        &self,
        organization_id: Uuid,
        after: DateTime<Utc>,
    ) -> DbErrorResult<i64> {
        let row = sqlx::query(
            r#"
                SELECT COUNT(*) AS n FROM matches
                WHERE organization_id = ? AND status = 'scheduled' AND kickoff_at >= ?
            "#,
        )
        .bind(organization_id.to_string())
        .bind(after.timestamp())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("n")?)
    }

    pub async fn update(&self, fixture: &Match) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE matches
                SET team_id = ?, opponent = ?, venue = ?, is_home = ?,
                    kickoff_at = ?, status = ?, home_score = ?, away_score = ?,
                    updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(fixture.team_id.to_string())
        .bind(&fixture.opponent)
        .bind(&fixture.venue)
        .bind(fixture.is_home)
        .bind(fixture.kickoff_at.timestamp())
        .bind(fixture.status.as_str())
        .bind(fixture.home_score)
        .bind(fixture.away_score)
        .bind(fixture.updated_at.timestamp())
        .bind(fixture.id.to_string())
        .bind(fixture.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM matches WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_match(row: &SqliteRow) -> DbErrorResult<Match> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let team_id: String = row.try_get("team_id")?;
    let status: String = row.try_get("status")?;

    Ok(Match {
        id: parse_uuid(&id, "matches.id")?,
        organization_id: parse_uuid(&organization_id, "matches.organization_id")?,
        team_id: parse_uuid(&team_id, "matches.team_id")?,
        opponent: row.try_get("opponent")?,
        venue: row.try_get("venue")?,
        is_home: row.try_get("is_home")?,
        kickoff_at: parse_timestamp(row.try_get("kickoff_at")?, "matches.kickoff_at")?,
        status: parse_enum(&status, "matches.status")?,
        home_score: row.try_get("home_score")?,
        away_score: row.try_get("away_score")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "matches.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "matches.updated_at")?,
    })
}
