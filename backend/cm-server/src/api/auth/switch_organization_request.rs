use crate::OrganizationSummary;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SwitchOrganizationRequest {
    pub organization_id: String,
}

#[derive(Debug, Serialize)]
pub struct SwitchOrganizationResponse {
    pub organization: OrganizationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
}
