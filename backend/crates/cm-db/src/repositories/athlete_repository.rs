//! Athlete repository. Every query is bound to an organization id;
//! an athlete belonging to another organization is simply not found.

use crate::Result as DbErrorResult;
use crate::repositories::row::{
    parse_date, parse_enum, parse_opt_uuid, parse_timestamp, parse_uuid,
};

use cm_core::{Athlete, AthleteStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

/// Optional list filters; everything is ANDed together
#[derive(Debug, Clone, Default)]
pub struct AthleteFilter {
    /// Substring match over name, email and fiscal code
    pub search: Option<String>,
    pub team_id: Option<Uuid>,
    pub status: Option<AthleteStatus>,
    pub uses_transport: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub struct AthleteRepository {
    pool: SqlitePool,
}

impl AthleteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, athlete: &Athlete) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO athletes (
                    id, organization_id, team_id, first_name, last_name,
                    birth_date, email, phone, fiscal_code, status,
                    uses_transport, transport_zone_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(athlete.id.to_string())
        .bind(athlete.organization_id.to_string())
        .bind(athlete.team_id.map(|id| id.to_string()))
        .bind(&athlete.first_name)
        .bind(&athlete.last_name)
        .bind(athlete.birth_date.to_string())
        .bind(&athlete.email)
        .bind(&athlete.phone)
        .bind(&athlete.fiscal_code)
        .bind(athlete.status.as_str())
        .bind(athlete.uses_transport)
        .bind(athlete.transport_zone_id.map(|id| id.to_string()))
        .bind(athlete.created_at.timestamp())
        .bind(athlete.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Athlete>> {
        let row = sqlx::query("SELECT * FROM athletes WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_athlete).transpose()
    }

    pub async fn find_all(
        &self,
        organization_id: Uuid,
        filter: &AthleteFilter,
    ) -> DbErrorResult<Vec<Athlete>> {
        let mut qb = filtered_query("SELECT * FROM athletes", organization_id, filter);
        qb.push(" ORDER BY last_name, first_name");

        if let Some(limit) = filter.limit {
            qb.push(" LIMIT ").push_bind(limit);
            if let Some(offset) = filter.offset {
                qb.push(" OFFSET ").push_bind(offset);
            }
        }

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.iter().map(map_athlete).collect()
    }

    /// Total rows matching the filter, for pagination metadata
    pub async fn count_filtered(
        &self,
        organization_id: Uuid,
        filter: &AthleteFilter,
    ) -> DbErrorResult<i64> {
        let mut qb = filtered_query("SELECT COUNT(*) AS n FROM athletes", organization_id, filter);
        let row = qb.build().fetch_one(&self.pool).await?;

        Ok(row.try_get("n")?)
    }

    pub async fn count(&self, organization_id: Uuid) -> DbErrorResult<i64> {
        self.count_filtered(organization_id, &AthleteFilter::default())
            .await
    }

    pub async fn find_by_team(
        &self,
        organization_id: Uuid,
        team_id: Uuid,
    ) -> DbErrorResult<Vec<Athlete>> {
        let filter = AthleteFilter {
            team_id: Some(team_id),
            ..AthleteFilter::default()
        };
        self.find_all(organization_id, &filter).await
    }

    pub async fn update(&self, athlete: &Athlete) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE athletes
                SET team_id = ?, first_name = ?, last_name = ?, birth_date = ?,
                    email = ?, phone = ?, fiscal_code = ?, status = ?,
                    uses_transport = ?, transport_zone_id = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(athlete.team_id.map(|id| id.to_string()))
        .bind(&athlete.first_name)
        .bind(&athlete.last_name)
        .bind(athlete.birth_date.to_string())
        .bind(&athlete.email)
        .bind(&athlete.phone)
        .bind(&athlete.fiscal_code)
        .bind(athlete.status.as_str())
        .bind(athlete.uses_transport)
        .bind(athlete.transport_zone_id.map(|id| id.to_string()))
        .bind(athlete.updated_at.timestamp())
        .bind(athlete.id.to_string())
        .bind(athlete.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM athletes WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Build `{select} WHERE organization_id = ? [AND ...filters]`
fn filtered_query<'a>(
    select: &str,
    organization_id: Uuid,
    filter: &'a AthleteFilter,
) -> QueryBuilder<'a, Sqlite> {
    let mut qb = QueryBuilder::new(select);
    qb.push(" WHERE organization_id = ")
        .push_bind(organization_id.to_string());

    if let Some(ref search) = filter.search {
        let pattern = format!("%{}%", search);
        qb.push(" AND (first_name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR last_name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR email LIKE ")
            .push_bind(pattern.clone())
            .push(" OR fiscal_code LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(team_id) = filter.team_id {
        qb.push(" AND team_id = ").push_bind(team_id.to_string());
    }

    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status.as_str());
    }

    if let Some(uses_transport) = filter.uses_transport {
        qb.push(" AND uses_transport = ").push_bind(uses_transport);
    }

    qb
}

fn map_athlete(row: &SqliteRow) -> DbErrorResult<Athlete> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let team_id: Option<String> = row.try_get("team_id")?;
    let zone_id: Option<String> = row.try_get("transport_zone_id")?;
    let birth_date: String = row.try_get("birth_date")?;
    let status: String = row.try_get("status")?;

    Ok(Athlete {
        id: parse_uuid(&id, "athletes.id")?,
        organization_id: parse_uuid(&organization_id, "athletes.organization_id")?,
        team_id: parse_opt_uuid(team_id.as_deref(), "athletes.team_id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        birth_date: parse_date(&birth_date, "athletes.birth_date")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        fiscal_code: row.try_get("fiscal_code")?,
        status: parse_enum(&status, "athletes.status")?,
        uses_transport: row.try_get("uses_transport")?,
        transport_zone_id: parse_opt_uuid(zone_id.as_deref(), "athletes.transport_zone_id")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "athletes.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "athletes.updated_at")?,
    })
}
