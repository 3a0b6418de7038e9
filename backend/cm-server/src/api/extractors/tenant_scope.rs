use uuid::Uuid;

/// Proof that the request was authorized for an operation within one
/// organization. Only `OrgContext::authorize`/`authorize_role` build
/// one, so a handler holding a scope has already passed the permission
/// gate, and every write it stamps and every filter it applies uses the
/// resolved organization - never a client-supplied one.
#[derive(Debug, Clone, Copy)]
pub struct TenantScope {
    organization_id: Uuid,
}

impl TenantScope {
    pub(crate) fn new(organization_id: Uuid) -> Self {
        Self { organization_id }
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }
}
