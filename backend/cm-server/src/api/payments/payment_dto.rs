use cm_core::Payment;

use serde::Serialize;

/// Payment DTO for JSON serialization; amounts are integer cents
#[derive(Debug, Serialize)]
pub struct PaymentDto {
    pub id: String,
    pub organization_id: String,
    pub athlete_id: String,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub due_date: String,
    pub paid_at: Option<i64>,
    pub method: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id.to_string(),
            organization_id: p.organization_id.to_string(),
            athlete_id: p.athlete_id.to_string(),
            description: p.description,
            amount_cents: p.amount_cents,
            currency: p.currency,
            status: p.status.as_str().to_string(),
            due_date: p.due_date.to_string(),
            paid_at: p.paid_at.map(|dt| dt.timestamp()),
            method: p.method,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
