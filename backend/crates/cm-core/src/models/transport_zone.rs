use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pickup area served by club transport, billed monthly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportZone {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub monthly_fee_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransportZone {
    pub fn new(organization_id: Uuid, name: String, monthly_fee_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name,
            monthly_fee_cents,
            created_at: now,
            updated_at: now,
        }
    }
}
