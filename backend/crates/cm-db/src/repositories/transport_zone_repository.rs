use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cm_core::TransportZone;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TransportZoneRepository {
    pool: SqlitePool,
}

impl TransportZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, zone: &TransportZone) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO transport_zones (
                    id, organization_id, name, monthly_fee_cents, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(zone.id.to_string())
        .bind(zone.organization_id.to_string())
        .bind(&zone.name)
        .bind(zone.monthly_fee_cents)
        .bind(zone.created_at.timestamp())
        .bind(zone.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<TransportZone>> {
        let row = sqlx::query("SELECT * FROM transport_zones WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_zone).transpose()
    }

    pub async fn find_all(&self, organization_id: Uuid) -> DbErrorResult<Vec<TransportZone>> {
        let rows =
            sqlx::query("SELECT * FROM transport_zones WHERE organization_id = ? ORDER BY name")
                .bind(organization_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(map_zone).collect()
    }

    pub async fn update(&self, zone: &TransportZone) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE transport_zones
                SET name = ?, monthly_fee_cents = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(&zone.name)
        .bind(zone.monthly_fee_cents)
        .bind(zone.updated_at.timestamp())
        .bind(zone.id.to_string())
        .bind(zone.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM transport_zones WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_zone(row: &SqliteRow) -> DbErrorResult<TransportZone> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;

    Ok(TransportZone {
        id: parse_uuid(&id, "transport_zones.id")?,
        organization_id: parse_uuid(&organization_id, "transport_zones.organization_id")?,
        name: row.try_get("name")?,
        monthly_fee_cents: row.try_get("monthly_fee_cents")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "transport_zones.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "transport_zones.updated_at")?,
    })
}
