use cm_core::Athlete;

use serde::Serialize;

/// Athlete DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AthleteDto {
    pub id: String,
    pub organization_id: String,
    pub team_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// ISO-8601 date
    pub birth_date: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fiscal_code: Option<String>,
    pub status: String,
    pub uses_transport: bool,
    pub transport_zone_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Athlete> for AthleteDto {
    fn from(a: Athlete) -> Self {
        Self {
            id: a.id.to_string(),
            organization_id: a.organization_id.to_string(),
            team_id: a.team_id.map(|id| id.to_string()),
            first_name: a.first_name,
            last_name: a.last_name,
            birth_date: a.birth_date.to_string(),
            email: a.email,
            phone: a.phone,
            fiscal_code: a.fiscal_code,
            status: a.status.as_str().to_string(),
            uses_transport: a.uses_transport,
            transport_zone_id: a.transport_zone_id.map(|id| id.to_string()),
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
