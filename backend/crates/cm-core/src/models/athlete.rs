//! Athlete entity - a registered club member who plays.

use crate::AthleteStatus;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub team_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// National tax identifier (codice fiscale)
    pub fiscal_code: Option<String>,
    pub status: AthleteStatus,
    pub uses_transport: bool,
    pub transport_zone_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Athlete {
    pub fn new(
        organization_id: Uuid,
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            team_id: None,
            first_name,
            last_name,
            birth_date,
            email: None,
            phone: None,
            fiscal_code: None,
            status: AthleteStatus::Active,
            uses_transport: false,
            transport_zone_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Age in whole years at `on`
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        on.years_since(self.birth_date).unwrap_or(0)
    }
}
