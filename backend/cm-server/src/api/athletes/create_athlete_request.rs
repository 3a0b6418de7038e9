use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAthleteRequest {
    pub first_name: String,
    pub last_name: String,

    /// ISO-8601 date (YYYY-MM-DD)
    pub birth_date: String,

    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub fiscal_code: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub uses_transport: Option<bool>,

    #[serde(default)]
    pub transport_zone_id: Option<String>,

    /// Accepted for wire compatibility and ignored: the athlete is
    /// always created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
