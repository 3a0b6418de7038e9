use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBusRouteRequest {
    pub zone_id: String,
    pub name: String,

    /// Local departure time, "HH:MM"
    pub departure_time: String,

    #[serde(default)]
    pub capacity: Option<i32>,

    /// Accepted for wire compatibility and ignored: the route is always
    /// created in the organization the request resolved to.
    #[serde(default)]
    pub organization_id: Option<String>,
}
