use crate::Permission;

use std::str::FromStr;

#[test]
fn test_permission_as_str() {
    assert_eq!(Permission::AthleteView.as_str(), "athlete.view");
    assert_eq!(Permission::TeamManageRoster.as_str(), "team.manage_roster");
    assert_eq!(Permission::OrgSettingsUpdate.as_str(), "org.settings.update");
}

#[test]
fn test_permission_from_str() {
    assert_eq!(
        Permission::from_str("athlete.view").unwrap(),
        Permission::AthleteView
    );
    assert_eq!(
        Permission::from_str("payment.record").unwrap(),
        Permission::PaymentRecord
    );
    assert!(Permission::from_str("athlete.fly").is_err());
    // The all-marker is not a permission; it belongs to PermissionSet
    assert!(Permission::from_str("*").is_err());
}

#[test]
fn test_permission_round_trip() {
    let all = [
        Permission::AthleteView,
        Permission::MatchUpdateResults,
        Permission::DocumentUpload,
        Permission::RoleManage,
    ];
    for p in all {
        assert_eq!(Permission::from_str(p.as_str()).unwrap(), p);
    }
}
