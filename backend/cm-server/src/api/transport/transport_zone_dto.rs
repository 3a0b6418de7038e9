use cm_core::TransportZone;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TransportZoneDto {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub monthly_fee_cents: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<TransportZone> for TransportZoneDto {
    fn from(z: TransportZone) -> Self {
        Self {
            id: z.id.to_string(),
            organization_id: z.organization_id.to_string(),
            name: z.name,
            monthly_fee_cents: z.monthly_fee_cents,
            created_at: z.created_at.timestamp(),
            updated_at: z.updated_at.timestamp(),
        }
    }
}
