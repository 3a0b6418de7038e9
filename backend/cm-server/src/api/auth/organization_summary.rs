use cm_core::Organization;

use serde::Serialize;

/// Organization header data returned with login and switch responses
#[derive(Debug, Serialize)]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,
    pub code: String,
    pub subdomain: String,
    pub plan: String,
}

impl From<&Organization> for OrganizationSummary {
    fn from(o: &Organization) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.name.clone(),
            code: o.code.clone(),
            subdomain: o.subdomain.clone(),
            plan: o.plan.as_str().to_string(),
        }
    }
}
