use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateBusRouteRequest {
    #[serde(default)]
    pub zone_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// Local departure time, "HH:MM"
    #[serde(default)]
    pub departure_time: Option<String>,

    #[serde(default)]
    pub capacity: Option<i32>,
}
