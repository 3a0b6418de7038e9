use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled bus run serving one transport zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusRoute {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub zone_id: Uuid,
    pub name: String,
    /// Local departure time, "HH:MM"
    pub departure_time: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BusRoute {
    pub fn new(
        organization_id: Uuid,
        zone_id: Uuid,
        name: String,
        departure_time: String,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            zone_id,
            name,
            departure_time,
            capacity,
            created_at: now,
            updated_at: now,
        }
    }
}
