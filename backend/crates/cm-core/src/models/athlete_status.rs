use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use crate::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Athlete registration status within a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AthleteStatus {
    /// Registered and eligible for selection
    #[default]
    Active,
    /// Temporarily out (medical)
    Injured,
    /// Disciplinary suspension
    Suspended,
    /// No longer part of the club
    Inactive,
}

impl AthleteStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Injured => "injured",
            Self::Suspended => "suspended",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for AthleteStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "injured" => Ok(Self::Injured),
            "suspended" => Ok(Self::Suspended),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CoreError::InvalidAthleteStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AthleteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
