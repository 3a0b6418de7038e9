use crate::{Permission, Result as CoreErrorResult};

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire marker meaning "every capability". Only meaningful inside a
/// permission list; it never parses as an individual `Permission`.
pub const ALL_MARKER: &str = "*";

/// The set of capabilities granted to a role or carried by a claim.
///
/// `All` is an explicit superset marker, not a wildcard string, so
/// `allows` is a total match over a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSet {
    /// Every capability, including ones added later
    All,
    /// Exactly the listed capabilities
    Granted(BTreeSet<Permission>),
}

impl PermissionSet {
    /// Empty grant (no capabilities)
    pub fn empty() -> Self {
        Self::Granted(BTreeSet::new())
    }

    pub fn granted<I: IntoIterator<Item = Permission>>(perms: I) -> Self {
        Self::Granted(perms.into_iter().collect())
    }

    /// True iff this set grants the capability
    pub fn allows(&self, permission: Permission) -> bool {
        match self {
            Self::All => true,
            Self::Granted(set) => set.contains(&permission),
        }
    }

    /// Parse a wire-format list. The `*` marker anywhere in the list
    /// yields `All`; unknown permission strings are an error.
    #[track_caller]
    pub fn from_strings<I, S>(values: I) -> CoreErrorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for value in values {
            let value = value.as_ref();
            if value == ALL_MARKER {
                return Ok(Self::All);
            }
            set.insert(Permission::from_str(value)?);
        }
        Ok(Self::Granted(set))
    }

    /// Wire-format list; `All` serializes as the single `*` marker
    pub fn as_strings(&self) -> Vec<String> {
        match self {
            Self::All => vec![ALL_MARKER.to_string()],
            Self::Granted(set) => set.iter().map(|p| p.as_str().to_string()).collect(),
        }
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_strings().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Self::from_strings(&values).map_err(DeError::custom)
    }
}
