use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateTransportZoneRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub monthly_fee_cents: Option<i64>,
}
