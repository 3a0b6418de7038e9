use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cm_core::BusRoute;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct BusRouteRepository {
    pool: SqlitePool,
}

impl BusRouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, route: &BusRoute) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO bus_routes (
                    id, organization_id, zone_id, name, departure_time,
                    capacity, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(route.id.to_string())
        .bind(route.organization_id.to_string())
        .bind(route.zone_id.to_string())
        .bind(&route.name)
        .bind(&route.departure_time)
        .bind(route.capacity)
        .bind(route.created_at.timestamp())
        .bind(route.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<BusRoute>> {
        let row = sqlx::query("SELECT * FROM bus_routes WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_route).transpose()
    }

    pub async fn find_all(&self, organization_id: Uuid) -> DbErrorResult<Vec<BusRoute>> {
        let rows = sqlx::query("SELECT * FROM bus_routes WHERE organization_id = ? ORDER BY name")
            .bind(organization_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_route).collect()
    }

    pub async fn find_by_zone(
        &self,
        organization_id: Uuid,
        zone_id: Uuid,
    ) -> DbErrorResult<Vec<BusRoute>> {
        let rows = sqlx::query(
            r#"
                SELECT * FROM bus_routes
                WHERE organization_id = ? AND zone_id = ?
                ORDER BY departure_time
            "#,
        )
        .bind(organization_id.to_string())
        .bind(zone_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_route).collect()
    }

    pub async fn update(&self, route: &BusRoute) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE bus_routes
                SET zone_id = ?, name = ?, departure_time = ?, capacity = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(route.zone_id.to_string())
        .bind(&route.name)
        .bind(&route.departure_time)
        .bind(route.capacity)
        .bind(route.updated_at.timestamp())
        .bind(route.id.to_string())
        .bind(route.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM bus_routes WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_route(row: &SqliteRow) -> DbErrorResult<BusRoute> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let zone_id: String = row.try_get("zone_id")?;

    Ok(BusRoute {
        id: parse_uuid(&id, "bus_routes.id")?,
        organization_id: parse_uuid(&organization_id, "bus_routes.organization_id")?,
        zone_id: parse_uuid(&zone_id, "bus_routes.zone_id")?,
        name: row.try_get("name")?,
        departure_time: row.try_get("departure_time")?,
        capacity: row.try_get("capacity")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "bus_routes.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "bus_routes.updated_at")?,
    })
}
