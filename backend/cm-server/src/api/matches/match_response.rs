use crate::MatchDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub fixture: MatchDto,
}
