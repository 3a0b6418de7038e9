//! Tenant selection from raw request parts.
//!
//! This is the pure half of organization resolution: it decides WHICH
//! selector a request carries, in precedence order. Looking the
//! selector up and checking membership happens at the API layer, which
//! has the persistence handle.

/// Header carrying an explicit organization id
pub const ORGANIZATION_HEADER: &str = "X-Organization-Id";

/// Query-parameter fallback for non-browser API clients
pub const ORGANIZATION_QUERY_PARAM: &str = "organizationId";

/// Host labels that never name a tenant
const RESERVED_SUBDOMAINS: [&str; 4] = ["www", "app", "api", "admin"];

/// Where the request named its tenant. Precedence:
/// header > sub-domain > query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantSelector {
    /// `X-Organization-Id` header value (an organization id)
    Header(String),
    /// First host label (an organization subdomain)
    Subdomain(String),
    /// `organizationId` query parameter (an organization id)
    Query(String),
}

impl TenantSelector {
    pub fn value(&self) -> &str {
        match self {
            Self::Header(v) | Self::Subdomain(v) | Self::Query(v) => v,
        }
    }
}

/// Extract the tenant sub-domain from a `Host` header value.
///
/// The first label before the first dot counts, but only when the host
/// has at least three labels (so an apex like `example.com` never
/// resolves) and the label is not reserved. Any port suffix is ignored.
pub fn subdomain_of(host: &str) -> Option<&str> {
    let host = host.split(':').next().unwrap_or(host);

    let mut labels = host.split('.');
    let first = labels.next().filter(|l| !l.is_empty())?;
    if labels.count() < 2 {
        return None;
    }
    if RESERVED_SUBDOMAINS.contains(&first) {
        return None;
    }

    Some(first)
}

/// Pick the tenant selector for a request, first match wins.
/// Returns `None` when no source names a tenant; the caller then falls
/// back to the claim's organization or, for super admins, a default.
pub fn select_tenant(
    header: Option<&str>,
    host: Option<&str>,
    query: Option<&str>,
) -> Option<TenantSelector> {
    if let Some(id) = header.filter(|v| !v.is_empty()) {
        return Some(TenantSelector::Header(id.to_string()));
    }

    if let Some(label) = host.and_then(subdomain_of) {
        return Some(TenantSelector::Subdomain(label.to_string()));
    }

    query
        .filter(|v| !v.is_empty())
        .map(|id| TenantSelector::Query(id.to_string()))
}
