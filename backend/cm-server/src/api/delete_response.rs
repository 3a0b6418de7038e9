use serde::Serialize;

/// Uniform body for successful DELETE operations
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
