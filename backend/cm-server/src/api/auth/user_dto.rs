use cm_core::User;

use serde::Serialize;

/// User profile for auth responses; never includes the password hash
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_super_admin: bool,
}

impl UserDto {
    pub fn from_user(user: &User, role: Option<&str>) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: role.map(str::to_string),
            is_super_admin: user.is_super_admin,
        }
    }
}
