use crate::AthleteDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AthleteResponse {
    pub athlete: AthleteDto,
}
