use crate::OrganizationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub organization: OrganizationDto,
}
