use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub athlete_id: String,
    pub description: String,

    /// Integer cents, must be positive
    pub amount_cents: i64,

    /// ISO-8601 date (YYYY-MM-DD)
    pub due_date: String,

    /// ISO 4217 code; defaults to EUR
    #[serde(default)]
    pub currency: Option<String>,

    /// Accepted for wire compatibility and ignored: the payment is
    /// always created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
