use crate::AthleteDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AthleteListResponse {
    pub athletes: Vec<AthleteDto>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}
