use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListPaymentsQuery {
    /// pending, paid, overdue or cancelled
    #[serde(default)]
    pub status: Option<String>,

    /// Restrict to one athlete's payments
    #[serde(default)]
    pub athlete_id: Option<String>,
}
