use crate::MemberDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
}
