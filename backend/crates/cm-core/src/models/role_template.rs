//! Role templates seeded into every new organization.

use crate::{Permission, PermissionSet};

/// Blueprint for a system role created with each organization
#[derive(Debug, Clone)]
pub struct RoleTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub permissions: PermissionSet,
}

/// The default role set for a fresh organization.
/// "Admin" must exist: registration assigns it to the founding user.
pub fn default_roles() -> Vec<RoleTemplate> {
    use Permission::*;

    vec![
        RoleTemplate {
            name: "Admin",
            description: "Full access to the organization",
            permissions: PermissionSet::All,
        },
        RoleTemplate {
            name: "Manager",
            description: "Manage teams, athletes and matches",
            permissions: PermissionSet::granted([
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
                TransportView,
                TransportManage,
                ReportView,
                UserView,
            ]),
        },
        RoleTemplate {
            name: "Coach",
            description: "Manage rosters and record results",
            permissions: PermissionSet::granted([
                AthleteView,
                TeamView,
                TeamManageRoster,
                MatchView,
                MatchUpdateResults,
                DocumentView,
                TransportView,
                ReportView,
            ]),
        },
        RoleTemplate {
            name: "Staff",
            description: "Day-to-day operations",
            permissions: PermissionSet::granted([
                AthleteView,
                TeamView,
                MatchView,
                DocumentView,
                DocumentUpload,
                PaymentView,
                PaymentRecord,
                TransportView,
                ReportView,
            ]),
        },
        RoleTemplate {
            name: "Viewer",
            description: "Read-only access",
            permissions: PermissionSet::granted([
                AthleteView,
                TeamView,
                MatchView,
                DocumentView,
                ReportView,
            ]),
        },
    ]
}
