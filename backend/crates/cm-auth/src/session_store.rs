use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process memory of which organization a super admin is working in.
///
/// Super-admin tokens carry no tenant; the first request that falls
/// back to the configured default organization records the choice here
/// so every later request in the same session resolves identically.
/// This is the only cross-request mutable state in the auth path.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Uuid>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the organization chosen for a user's session
    pub async fn remember_organization(&self, user_id: Uuid, organization_id: Uuid) {
        self.inner.write().await.insert(user_id, organization_id);
    }

    /// The organization previously chosen for this user, if any
    pub async fn organization_for(&self, user_id: Uuid) -> Option<Uuid> {
        self.inner.read().await.get(&user_id).copied()
    }

    /// Drop the remembered organization (logout, org switch)
    pub async fn forget(&self, user_id: Uuid) {
        self.inner.write().await.remove(&user_id);
    }
}
