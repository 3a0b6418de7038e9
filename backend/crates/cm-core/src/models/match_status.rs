use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use crate::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    /// Result recorded
    Played,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Played => "played",
            Self::Postponed => "postponed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "played" => Ok(Self::Played),
            "postponed" => Ok(Self::Postponed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(CoreError::InvalidMatchStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
