use serde::{Deserialize, Serialize};

/// Validity of a document, derived from its expiry date.
/// Never stored; computed against "today" when documents are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Valid, expiry more than the warning window away
    Valid,
    /// Valid but expiring within the warning window
    Expiring,
    /// Expiry date has passed
    Expired,
    /// Document has no expiry date
    NoExpiry,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
            Self::NoExpiry => "no_expiry",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
