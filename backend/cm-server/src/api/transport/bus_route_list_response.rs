use crate::BusRouteDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BusRouteListResponse {
    pub routes: Vec<BusRouteDto>,
}
