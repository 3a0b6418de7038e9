pub mod auth_session;
pub mod org_context;
pub mod tenant_scope;
