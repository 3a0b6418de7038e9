use crate::{AuthError, Claims, authorize, authorize_role};

use cm_core::{Permission, PermissionSet};

use chrono::Utc;
use uuid::Uuid;

fn claims_with(permissions: PermissionSet) -> Claims {
    Claims::for_member(
        Uuid::new_v4(),
        "staff@demo.club".to_string(),
        Uuid::new_v4(),
        "Staff".to_string(),
        permissions,
        Utc::now(),
        3600,
    )
}

fn super_admin_claims() -> Claims {
    Claims::for_super_admin(
        Uuid::new_v4(),
        "root@platform.local".to_string(),
        Utc::now(),
        3600,
    )
}

#[test]
fn given_granted_permission_when_authorized_then_allowed() {
    let claims = claims_with(PermissionSet::granted([Permission::AthleteView]));

    assert!(authorize(&claims, Permission::AthleteView).is_ok());
}

#[test]
fn given_missing_permission_when_authorized_then_forbidden() {
    let claims = claims_with(PermissionSet::granted([Permission::AthleteView]));

    let result = authorize(&claims, Permission::AthleteDelete);

    assert!(matches!(result, Err(AuthError::Forbidden { .. })));
}

#[test]
fn given_empty_permission_set_when_authorized_then_forbidden() {
    let claims = claims_with(PermissionSet::empty());

    assert!(authorize(&claims, Permission::AthleteView).is_err());
}

#[test]
fn given_all_marker_when_authorized_then_every_permission_allowed() {
    let claims = claims_with(PermissionSet::All);

    assert!(authorize(&claims, Permission::AthleteDelete).is_ok());
    assert!(authorize(&claims, Permission::OrgSettingsUpdate).is_ok());
}

#[test]
fn given_super_admin_when_authorized_then_always_allowed() {
    let mut claims = super_admin_claims();
    // Even with an empty permission set the bypass holds
    claims.permissions = PermissionSet::empty();

    assert!(authorize(&claims, Permission::AthleteDelete).is_ok());
    assert!(authorize_role(&claims, &["Admin"]).is_ok());
}

#[test]
fn given_role_in_allow_list_when_authorized_then_allowed() {
    let claims = claims_with(PermissionSet::empty());

    assert!(authorize_role(&claims, &["Staff", "Admin"]).is_ok());
}

#[test]
fn given_role_outside_allow_list_when_authorized_then_forbidden() {
    let claims = claims_with(PermissionSet::empty());

    let result = authorize_role(&claims, &["Admin"]);

    assert!(matches!(result, Err(AuthError::Forbidden { .. })));
}
