use serde::Serialize;

/// The organizations the caller belongs to, with their role in each
#[derive(Debug, Serialize)]
pub struct MyOrganizationsResponse {
    pub organizations: Vec<MembershipDto>,
}

#[derive(Debug, Serialize)]
pub struct MembershipDto {
    pub id: String,
    pub name: String,
    pub subdomain: String,
    pub role: String,
    pub is_default: bool,
}
