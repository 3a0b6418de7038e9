//! Permission evaluation against verified claims.
//!
//! Super admins bypass every check. Everyone else is allowed exactly
//! what their permission set grants.

use crate::{AuthError, Claims, Result as AuthErrorResult};

use cm_core::{ErrorLocation, Permission};

use std::panic::Location;

/// Gate an operation on a single capability
#[track_caller]
pub fn authorize(claims: &Claims, required: Permission) -> AuthErrorResult<()> {
    if claims.is_super_admin {
        return Ok(());
    }

    if claims.permissions.allows(required) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            message: format!("Missing required permission: {}", required),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Gate an operation on a role-name allow-list
#[track_caller]
pub fn authorize_role(claims: &Claims, allowed_roles: &[&str]) -> AuthErrorResult<()> {
    if claims.is_super_admin {
        return Ok(());
    }

    match claims.role.as_deref() {
        Some(role) if allowed_roles.contains(&role) => Ok(()),
        _ => Err(AuthError::Forbidden {
            message: format!("Requires one of roles: {}", allowed_roles.join(", ")),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
