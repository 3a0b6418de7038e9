//! Organization entity - the tenant boundary. Every club-owned record
//! carries an organization id and is invisible to other organizations.

use crate::OrganizationPlan;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    /// Short display code (e.g., "DEMO")
    pub code: String,
    /// Host label used for sub-domain tenant resolution; unique
    pub subdomain: String,
    pub plan: OrganizationPlan,
    pub is_active: bool,
    /// Maximum number of member accounts
    pub max_users: i32,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(name: String, code: String, subdomain: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            code,
            subdomain,
            plan: OrganizationPlan::Trial,
            is_active: true,
            max_users: 25,
            trial_ends_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derive a routable sub-domain label from a club name:
    /// lowercase, runs of non-alphanumerics collapsed to single hyphens.
    pub fn subdomain_from_name(name: &str) -> String {
        let mut label = String::with_capacity(name.len());
        let mut last_hyphen = true;
        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                label.push(c.to_ascii_lowercase());
                last_hyphen = false;
            } else if !last_hyphen {
                label.push('-');
                last_hyphen = true;
            }
        }
        label.trim_matches('-').to_string()
    }
}
