use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTransportZoneRequest {
    pub name: String,

    #[serde(default)]
    pub monthly_fee_cents: Option<i64>,

    /// Accepted for wire compatibility and ignored: the zone is always
    /// created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
