use cm_core::Team;

use serde::Serialize;

/// Team DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TeamDto {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub category: String,
    pub season: String,
    pub coach_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Team> for TeamDto {
    fn from(t: Team) -> Self {
        Self {
            id: t.id.to_string(),
            organization_id: t.organization_id.to_string(),
            name: t.name,
            category: t.category,
            season: t.season,
            coach_name: t.coach_name,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
