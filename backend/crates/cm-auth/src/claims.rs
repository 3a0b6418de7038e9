use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use cm_core::{ErrorLocation, PermissionSet};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access-token claims. Immutable once issued; the organization id is
/// null only for super admins, who pick a working organization per
/// request instead of carrying one in the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// Role name within the token's organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(default)]
    pub is_super_admin: bool,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Claims for an organization member. The expiry horizon is fixed
    /// at issue time: `issued_at + ttl_secs`.
    pub fn for_member(
        user_id: Uuid,
        email: String,
        organization_id: Uuid,
        role: String,
        permissions: PermissionSet,
        issued_at: DateTime<Utc>,
        ttl_secs: i64,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            email,
            organization_id: Some(organization_id.to_string()),
            role: Some(role),
            permissions,
            is_super_admin: false,
            exp: issued_at.timestamp() + ttl_secs,
            iat: issued_at.timestamp(),
        }
    }

    /// Claims for a super admin: no tenant, every permission
    pub fn for_super_admin(
        user_id: Uuid,
        email: String,
        issued_at: DateTime<Utc>,
        ttl_secs: i64,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            email,
            organization_id: None,
            role: None,
            permissions: PermissionSet::All,
            is_super_admin: true,
            exp: issued_at.timestamp() + ttl_secs,
            iat: issued_at.timestamp(),
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // A member token normally carries its organization, but a user
        // who has not picked one yet may float without it; the
        // organization resolver rejects such requests downstream.
        if let Some(id) = self.organization_id.as_deref()
            && id.len() > 64
        {
            return Err(AuthError::InvalidClaim {
                claim: "organization_id".to_string(),
                message: "organization_id exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Parse the subject as a user id
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("not a valid UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Parse the organization claim, if present
    #[track_caller]
    pub fn organization_uuid(&self) -> AuthErrorResult<Option<Uuid>> {
        match self.organization_id.as_deref() {
            None => Ok(None),
            Some(id) => Uuid::parse_str(id).map(Some).map_err(|e| AuthError::InvalidClaim {
                claim: "organization_id".to_string(),
                message: format!("not a valid UUID: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Refresh-token claims: just enough to mint a new access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl RefreshClaims {
    pub fn new(
        user_id: Uuid,
        organization_id: Option<Uuid>,
        issued_at: DateTime<Utc>,
        ttl_secs: i64,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            organization_id: organization_id.map(|id| id.to_string()),
            exp: issued_at.timestamp() + ttl_secs,
            iat: issued_at.timestamp(),
        }
    }
}
