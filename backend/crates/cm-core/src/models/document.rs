//! Document entity - a dated certificate attached to an athlete
//! (medical certificate, identity document, federation card).

use crate::{DocumentCategory, DocumentStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days before expiry at which a document counts as "expiring"
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub athlete_id: Uuid,
    pub name: String,
    pub category: DocumentCategory,
    pub issued_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        organization_id: Uuid,
        athlete_id: Uuid,
        name: String,
        category: DocumentCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            athlete_id,
            name,
            category,
            issued_at: None,
            expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validity derived from the expiry date as of `today`
    pub fn status(&self, today: NaiveDate) -> DocumentStatus {
        match self.expires_at {
            None => DocumentStatus::NoExpiry,
            Some(expiry) if expiry < today => DocumentStatus::Expired,
            Some(expiry) if (expiry - today).num_days() <= EXPIRY_WARNING_DAYS => {
                DocumentStatus::Expiring
            }
            Some(_) => DocumentStatus::Valid,
        }
    }
}
