use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub athlete_id: String,
    pub name: String,

    /// medical, identity, federation or other
    pub category: String,

    /// ISO-8601 date (YYYY-MM-DD)
    #[serde(default)]
    pub issued_at: Option<String>,

    /// ISO-8601 date (YYYY-MM-DD)
    #[serde(default)]
    pub expires_at: Option<String>,

    /// Accepted for wire compatibility and ignored: the document is
    /// always created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
