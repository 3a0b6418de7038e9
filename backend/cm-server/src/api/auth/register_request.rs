use serde::Deserialize;

/// Registration joins an existing organization (organization_id) or
/// founds a new one (organization_name); exactly one must be given.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Join this existing organization (default Staff role)
    #[serde(default)]
    pub organization_id: Option<String>,

    /// Create a new organization and become its Admin
    #[serde(default)]
    pub organization_name: Option<String>,
}
