use crate::MatchDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchDto>,
}
