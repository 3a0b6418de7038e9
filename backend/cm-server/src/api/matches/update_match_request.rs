use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMatchRequest {
    #[serde(default)]
    pub opponent: Option<String>,

    #[serde(default)]
    pub venue: Option<String>,

    #[serde(default)]
    pub is_home: Option<bool>,

    /// Kickoff as a unix timestamp (seconds)
    #[serde(default)]
    pub kickoff_at: Option<i64>,

    /// scheduled, played, postponed or cancelled
    #[serde(default)]
    pub status: Option<String>,
}
