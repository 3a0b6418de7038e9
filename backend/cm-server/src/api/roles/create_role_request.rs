use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Dotted permission names; `*` grants everything
    pub permissions: Vec<String>,
}
