use crate::PaymentStatus;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fee owed by an athlete. Amounts are integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub athlete_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    /// ISO 4217 code
    pub currency: String,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    pub paid_at: Option<DateTime<Utc>>,
    /// How it was settled ("cash", "transfer", ...); free-form
    pub method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        organization_id: Uuid,
        athlete_id: Uuid,
        description: String,
        amount_cents: i64,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            athlete_id,
            description,
            amount_cents,
            currency: "EUR".to_string(),
            status: PaymentStatus::Pending,
            due_date,
            paid_at: None,
            method: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the payment settled
    pub fn record(&mut self, method: Option<String>, at: DateTime<Utc>) {
        self.status = PaymentStatus::Paid;
        self.paid_at = Some(at);
        self.method = method;
        self.updated_at = at;
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == PaymentStatus::Pending && self.due_date < today
    }
}
