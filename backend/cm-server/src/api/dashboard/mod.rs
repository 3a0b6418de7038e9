pub mod dashboard;
pub mod dashboard_summary_response;
