use serde::Deserialize;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ListAthletesQuery {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub uses_transport: Option<bool>,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_limit")]
    pub limit: i64,
}
