use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A roster within a club, usually an age bracket for one season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    /// Age bracket or league label (e.g., "U15")
    pub category: String,
    /// Season label (e.g., "2025-26")
    pub season: String,
    pub coach_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn new(organization_id: Uuid, name: String, category: String, season: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name,
            category,
            season,
            coach_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}
