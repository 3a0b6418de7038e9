use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    /// Restrict to one athlete's documents
    #[serde(default)]
    pub athlete_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringDocumentsQuery {
    /// Horizon in days; defaults to the standard warning window
    #[serde(default)]
    pub within_days: Option<i64>,
}
