use crate::TeamDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: TeamDto,
}
