pub mod bus_route_dto;
pub mod bus_route_list_response;
pub mod create_bus_route_request;
pub mod create_transport_zone_request;
pub mod transport;
pub mod transport_zone_dto;
pub mod transport_zone_list_response;
pub mod update_bus_route_request;
pub mod update_transport_zone_request;
