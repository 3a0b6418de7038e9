use crate::MatchStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fixture played by one of the club's teams against an external
/// opponent. Scores are absent until a result is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub team_id: Uuid,
    pub opponent: String,
    pub venue: Option<String>,
    /// True when the club's team plays at home
    pub is_home: bool,
    pub kickoff_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn new(
        organization_id: Uuid,
        team_id: Uuid,
        opponent: String,
        kickoff_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            team_id,
            opponent,
            venue: None,
            is_home: true,
            kickoff_at,
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the final score and mark the fixture played
    pub fn record_result(&mut self, home_score: i32, away_score: i32, at: DateTime<Utc>) {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = MatchStatus::Played;
        self.updated_at = at;
    }
}
