use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub team_id: String,
    pub opponent: String,

    /// Kickoff as a unix timestamp (seconds)
    pub kickoff_at: i64,

    #[serde(default)]
    pub venue: Option<String>,

    #[serde(default)]
    pub is_home: Option<bool>,

    /// Accepted for wire compatibility and ignored: the fixture is
    /// always created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
