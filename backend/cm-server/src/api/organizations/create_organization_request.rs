use serde::Deserialize;

/// Super-admin provisioning of a new organization
#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,

    /// Short display code; derived from the name when absent
    #[serde(default)]
    pub code: Option<String>,

    /// Routable sub-domain label; derived from the name when absent
    #[serde(default)]
    pub subdomain: Option<String>,

    #[serde(default)]
    pub plan: Option<String>,

    #[serde(default)]
    pub max_users: Option<i32>,
}
