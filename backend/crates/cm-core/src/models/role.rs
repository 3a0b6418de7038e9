use crate::PermissionSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named permission bundle scoped to one organization.
/// Role names are unique within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub permissions: PermissionSet,
    /// Seeded at organization creation; protected from deletion
    pub is_system: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn new(organization_id: Uuid, name: String, permissions: PermissionSet) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name,
            description: None,
            permissions,
            is_system: false,
            created_at: now,
            updated_at: now,
        }
    }
}
