use uuid::Uuid;

/// The organization resolved for one in-flight request.
/// Built after JWT verification and tenant resolution; never outlives
/// the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub organization_id: Uuid,
    pub name: String,
    pub code: String,
}

impl TenantContext {
    pub fn new(organization_id: Uuid, name: String, code: String) -> Self {
        Self {
            organization_id,
            name,
            code,
        }
    }
}
