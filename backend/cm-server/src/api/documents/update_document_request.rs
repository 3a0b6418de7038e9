use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// Empty string clears the date
    #[serde(default)]
    pub issued_at: Option<String>,

    /// Empty string clears the date
    #[serde(default)]
    pub expires_at: Option<String>,
}
