use cm_core::BusRoute;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BusRouteDto {
    pub id: String,
    pub organization_id: String,
    pub zone_id: String,
    pub name: String,
    pub departure_time: String,
    pub capacity: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<BusRoute> for BusRouteDto {
    fn from(r: BusRoute) -> Self {
        Self {
            id: r.id.to_string(),
            organization_id: r.organization_id.to_string(),
            zone_id: r.zone_id.to_string(),
            name: r.name,
            departure_time: r.departure_time,
            capacity: r.capacity,
            created_at: r.created_at.timestamp(),
            updated_at: r.updated_at.timestamp(),
        }
    }
}
