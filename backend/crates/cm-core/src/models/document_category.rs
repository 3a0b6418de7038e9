use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use crate::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Category of an athlete document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Medical certificate
    Medical,
    /// Identity document
    Identity,
    /// Federation membership card
    Federation,
    Other,
}

impl DocumentCategory {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Identity => "identity",
            Self::Federation => "federation",
            Self::Other => "other",
        }
    }
}

impl FromStr for DocumentCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "medical" => Ok(Self::Medical),
            "identity" => Ok(Self::Identity),
            "federation" => Ok(Self::Federation),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidDocumentCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
