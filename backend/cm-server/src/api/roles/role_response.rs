use crate::RoleDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: RoleDto,
}
