use cm_core::Document;

use chrono::NaiveDate;
use serde::Serialize;

/// Document DTO; status is derived from the expiry date at read time
#[derive(Debug, Serialize)]
pub struct DocumentDto {
    pub id: String,
    pub organization_id: String,
    pub athlete_id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl DocumentDto {
    pub fn from_document(d: Document, today: NaiveDate) -> Self {
        let status = d.status(today);
        Self {
            id: d.id.to_string(),
            organization_id: d.organization_id.to_string(),
            athlete_id: d.athlete_id.to_string(),
            name: d.name,
            category: d.category.as_str().to_string(),
            status: status.as_str().to_string(),
            issued_at: d.issued_at.map(|date| date.to_string()),
            expires_at: d.expires_at.map(|date| date.to_string()),
            created_at: d.created_at.timestamp(),
            updated_at: d.updated_at.timestamp(),
        }
    }
}
