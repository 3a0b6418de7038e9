use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub season: Option<String>,

    #[serde(default)]
    pub coach_name: Option<String>,
}
