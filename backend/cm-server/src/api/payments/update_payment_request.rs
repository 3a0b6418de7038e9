use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdatePaymentRequest {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub amount_cents: Option<i64>,

    /// ISO-8601 date (YYYY-MM-DD)
    #[serde(default)]
    pub due_date: Option<String>,

    /// pending, paid, overdue or cancelled
    #[serde(default)]
    pub status: Option<String>,
}
