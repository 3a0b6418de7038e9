use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use crate::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A single capability a role can grant.
///
/// Wire format is the dotted string used in role records and tokens
/// (e.g. `athlete.view`). The all-capability marker `*` is NOT a
/// permission; it is represented by `PermissionSet::All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    AthleteView,
    AthleteCreate,
    AthleteUpdate,
    AthleteDelete,
    TeamView,
    TeamCreate,
    TeamUpdate,
    TeamDelete,
    TeamManageRoster,
    MatchView,
    MatchCreate,
    MatchUpdate,
    MatchDelete,
    MatchUpdateResults,
    DocumentView,
    DocumentUpload,
    DocumentUpdate,
    DocumentDelete,
    PaymentView,
    PaymentCreate,
    PaymentUpdate,
    PaymentRecord,
    TransportView,
    TransportManage,
    ReportView,
    UserView,
    UserManage,
    RoleView,
    RoleManage,
    OrgSettingsView,
    OrgSettingsUpdate,
}

impl Permission {
    /// Convert to the dotted wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AthleteView => "athlete.view",
            Self::AthleteCreate => "athlete.create",
            Self::AthleteUpdate => "athlete.update",
            Self::AthleteDelete => "athlete.delete",
            Self::TeamView => "team.view",
            Self::TeamCreate => "team.create",
            Self::TeamUpdate => "team.update",
            Self::TeamDelete => "team.delete",
            Self::TeamManageRoster => "team.manage_roster",
            Self::MatchView => "match.view",
            Self::MatchCreate => "match.create",
            Self::MatchUpdate => "match.update",
            Self::MatchDelete => "match.delete",
            Self::MatchUpdateResults => "match.update_results",
            Self::DocumentView => "document.view",
            Self::DocumentUpload => "document.upload",
            Self::DocumentUpdate => "document.update",
            Self::DocumentDelete => "document.delete",
            Self::PaymentView => "payment.view",
            Self::PaymentCreate => "payment.create",
            Self::PaymentUpdate => "payment.update",
            Self::PaymentRecord => "payment.record",
            Self::TransportView => "transport.view",
            Self::TransportManage => "transport.manage",
            Self::ReportView => "report.view",
            Self::UserView => "user.view",
            Self::UserManage => "user.manage",
            Self::RoleView => "role.view",
            Self::RoleManage => "role.manage",
            Self::OrgSettingsView => "org.settings.view",
            Self::OrgSettingsUpdate => "org.settings.update",
        }
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "athlete.view" => Ok(Self::AthleteView),
            "athlete.create" => Ok(Self::AthleteCreate),
            "athlete.update" => Ok(Self::AthleteUpdate),
            "athlete.delete" => Ok(Self::AthleteDelete),
            "team.view" => Ok(Self::TeamView),
            "team.create" => Ok(Self::TeamCreate),
            "team.update" => Ok(Self::TeamUpdate),
            "team.delete" => Ok(Self::TeamDelete),
            "team.manage_roster" => Ok(Self::TeamManageRoster),
            "match.view" => Ok(Self::MatchView),
            "match.create" => Ok(Self::MatchCreate),
            "match.update" => Ok(Self::MatchUpdate),
            "match.delete" => Ok(Self::MatchDelete),
            "match.update_results" => Ok(Self::MatchUpdateResults),
            "document.view" => Ok(Self::DocumentView),
            "document.upload" => Ok(Self::DocumentUpload),
            "document.update" => Ok(Self::DocumentUpdate),
            "document.delete" => Ok(Self::DocumentDelete),
            "payment.view" => Ok(Self::PaymentView),
            "payment.create" => Ok(Self::PaymentCreate),
            "payment.update" => Ok(Self::PaymentUpdate),
            "payment.record" => Ok(Self::PaymentRecord),
            "transport.view" => Ok(Self::TransportView),
            "transport.manage" => Ok(Self::TransportManage),
            "report.view" => Ok(Self::ReportView),
            "user.view" => Ok(Self::UserView),
            "user.manage" => Ok(Self::UserManage),
            "role.view" => Ok(Self::RoleView),
            "role.manage" => Ok(Self::RoleManage),
            "org.settings.view" => Ok(Self::OrgSettingsView),
            "org.settings.update" => Ok(Self::OrgSettingsUpdate),
            _ => Err(CoreError::InvalidPermission {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<String> for Permission {
    type Error = CoreError;

    fn try_from(s: String) -> CoreErrorResult<Self> {
        s.parse()
    }
}

impl From<Permission> for String {
    fn from(p: Permission) -> Self {
        p.as_str().to_string()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
