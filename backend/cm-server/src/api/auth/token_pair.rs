use serde::Serialize;

/// Fresh access + refresh token pair
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}
