pub mod create_organization_request;
pub mod organization_dto;
pub mod organization_list_response;
pub mod organization_response;
pub mod organizations;
pub mod update_organization_request;
