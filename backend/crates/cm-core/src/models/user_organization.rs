use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership link between a user and an organization.
/// At most one link exists per (user, organization) pair; each link
/// references exactly one role in that organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOrganization {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role_id: Uuid,
    /// The organization picked at login when the user belongs to several
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl UserOrganization {
    pub fn new(user_id: Uuid, organization_id: Uuid, role_id: Uuid, is_default: bool) -> Self {
        Self {
            user_id,
            organization_id,
            role_id,
            is_default,
            created_at: Utc::now(),
        }
    }
}
