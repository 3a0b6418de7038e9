use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,

    /// Age bracket or league label (e.g., "U15")
    pub category: String,

    /// Season label (e.g., "2025-26")
    pub season: String,

    #[serde(default)]
    pub coach_name: Option<String>,

    /// Accepted for wire compatibility and ignored: the team is always
    /// created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
