use crate::{Permission, PermissionSet};

#[test]
fn test_all_allows_everything() {
    let set = PermissionSet::All;
    assert!(set.allows(Permission::AthleteView));
    assert!(set.allows(Permission::OrgSettingsUpdate));
}

#[test]
fn test_granted_allows_only_members() {
    let set = PermissionSet::granted([Permission::AthleteView, Permission::TeamView]);
    assert!(set.allows(Permission::AthleteView));
    assert!(!set.allows(Permission::AthleteDelete));
}

#[test]
fn test_from_strings_with_all_marker() {
    let set = PermissionSet::from_strings(["athlete.view", "*", "team.view"]).unwrap();
    assert_eq!(set, PermissionSet::All);
}

#[test]
fn test_from_strings_rejects_unknown() {
    assert!(PermissionSet::from_strings(["athlete.view", "nope"]).is_err());
}

#[test]
fn test_serde_round_trip() {
    let set = PermissionSet::granted([Permission::PaymentView, Permission::PaymentRecord]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["payment.view","payment.record"]"#);

    let back: PermissionSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);

    let all: PermissionSet = serde_json::from_str(r#"["*"]"#).unwrap();
    assert_eq!(all, PermissionSet::All);
}
