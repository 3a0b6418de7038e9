use crate::{OrganizationSummary, UserDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserDto,
    /// Absent for super admins, who log in without a tenant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationSummary>,
    pub access_token: String,
    pub refresh_token: String,
}

/// Returned instead of tokens when a multi-organization user must pick
/// an organization and has no default
#[derive(Debug, Serialize)]
pub struct OrganizationChoicesResponse {
    pub requires_organization_selection: bool,
    pub organizations: Vec<OrganizationChoice>,
}

#[derive(Debug, Serialize)]
pub struct OrganizationChoice {
    pub id: String,
    pub name: String,
    pub subdomain: String,
    pub role: String,
}
