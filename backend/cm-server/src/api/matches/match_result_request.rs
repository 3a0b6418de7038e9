use serde::Deserialize;

/// Body of POST /matches/{id}/result
#[derive(Debug, Deserialize)]
pub struct MatchResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}
