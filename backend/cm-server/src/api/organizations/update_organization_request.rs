use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateOrganizationRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub plan: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde(default)]
    pub max_users: Option<i32>,
}
