use crate::TransportZoneDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TransportZoneListResponse {
    pub zones: Vec<TransportZoneDto>,
}
