use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRoleRequest {
    pub role_id: String,
}
