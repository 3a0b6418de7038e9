use cm_core::Match;

use serde::Serialize;

/// Match DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct MatchDto {
    pub id: String,
    pub organization_id: String,
    pub team_id: String,
    pub opponent: String,
    pub venue: Option<String>,
    pub is_home: bool,
    pub kickoff_at: i64,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Match> for MatchDto {
    fn from(m: Match) -> Self {
        Self {
            id: m.id.to_string(),
            organization_id: m.organization_id.to_string(),
            team_id: m.team_id.to_string(),
            opponent: m.opponent,
            venue: m.venue,
            is_home: m.is_home,
            kickoff_at: m.kickoff_at.timestamp(),
            status: m.status.as_str().to_string(),
            home_score: m.home_score,
            away_score: m.away_score,
            created_at: m.created_at.timestamp(),
            updated_at: m.updated_at.timestamp(),
        }
    }
}
