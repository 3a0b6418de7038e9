use cm_core::Role;

use serde::Serialize;

/// Role DTO; permissions use the dotted wire names, `*` meaning all
#[derive(Debug, Serialize)]
pub struct RoleDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub is_system: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name,
            description: r.description,
            permissions: r.permissions.as_strings(),
            is_system: r.is_system,
            created_at: r.created_at.timestamp(),
            updated_at: r.updated_at.timestamp(),
        }
    }
}
