use crate::OrganizationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrganizationListResponse {
    pub organizations: Vec<OrganizationDto>,
}
