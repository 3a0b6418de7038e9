use crate::TeamDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamDto>,
}
