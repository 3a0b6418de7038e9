use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateAthleteRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// ISO-8601 date (YYYY-MM-DD)
    #[serde(default)]
    pub birth_date: Option<String>,

    /// Empty string clears the team assignment
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

    /// Empty string clears the zone assignment
    #[serde(default)]
    pub transport_zone_id: Option<String>,
}
