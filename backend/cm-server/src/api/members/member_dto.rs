use serde::Serialize;

/// A user's membership in the current organization
#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_default: bool,
    pub joined_at: i64,
}
