use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,

    /// Organization to log into, for users belonging to several
    #[serde(default)]
    pub organization_id: Option<String>,
}
