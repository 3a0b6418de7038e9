use serde::Serialize;

/// Headline counts for the admin dashboard, all scoped to the resolved
/// organization
#[derive(Debug, Serialize)]
pub struct DashboardSummaryResponse {
    pub athletes: i64,
    pub teams: i64,
    pub pending_payments: i64,
    pub expiring_documents: i64,
    pub upcoming_matches: i64,
}
