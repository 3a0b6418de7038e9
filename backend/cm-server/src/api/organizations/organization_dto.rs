use cm_core::Organization;

use serde::Serialize;

/// Organization DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct OrganizationDto {
    pub id: String,
    pub name: String,
    pub code: String,
    pub subdomain: String,
    pub plan: String,
    pub is_active: bool,
    pub max_users: i32,
    pub trial_ends_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Organization> for OrganizationDto {
    fn from(o: Organization) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.name,
            code: o.code,
            subdomain: o.subdomain,
            plan: o.plan.as_str().to_string(),
            is_active: o.is_active,
            max_users: o.max_users,
            trial_ends_at: o.trial_ends_at.map(|dt| dt.timestamp()),
            created_at: o.created_at.timestamp(),
            updated_at: o.updated_at.timestamp(),
        }
    }
}
