pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    athletes::{
        athlete_dto::AthleteDto,
        athlete_list_response::AthleteListResponse,
        athlete_response::AthleteResponse,
        create_athlete_request::CreateAthleteRequest,
        list_athletes_query::ListAthletesQuery,
        update_athlete_request::UpdateAthleteRequest,
    },
    auth::{
        login_request::LoginRequest,
        login_response::{LoginResponse, OrganizationChoice, OrganizationChoicesResponse},
        my_organizations_response::{MembershipDto, MyOrganizationsResponse},
        organization_summary::OrganizationSummary,
        refresh_request::RefreshRequest,
        register_request::RegisterRequest,
        switch_organization_request::{SwitchOrganizationRequest, SwitchOrganizationResponse},
        token_pair::TokenPairResponse,
        user_dto::UserDto,
    },
    dashboard::dashboard_summary_response::DashboardSummaryResponse,
    delete_response::DeleteResponse,
    documents::{
        create_document_request::CreateDocumentRequest,
        document_dto::DocumentDto,
        document_list_response::DocumentListResponse,
        document_response::DocumentResponse,
        list_documents_query::ListDocumentsQuery,
        update_document_request::UpdateDocumentRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_session::AuthSession,
    extractors::org_context::OrgContext,
    extractors::tenant_scope::TenantScope,
    matches::{
        create_match_request::CreateMatchRequest,
        match_dto::MatchDto,
        match_list_response::MatchListResponse,
        match_response::MatchResponse,
        match_result_request::MatchResultRequest,
        update_match_request::UpdateMatchRequest,
    },
    members::{
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        update_member_role_request::UpdateMemberRoleRequest,
    },
    organizations::{
        create_organization_request::CreateOrganizationRequest,
        organization_dto::OrganizationDto,
        organization_list_response::OrganizationListResponse,
        organization_response::OrganizationResponse,
        update_organization_request::UpdateOrganizationRequest,
    },
    payments::{
        create_payment_request::CreatePaymentRequest,
        list_payments_query::ListPaymentsQuery,
        payment_dto::PaymentDto,
        payment_list_response::PaymentListResponse,
        payment_response::PaymentResponse,
        record_payment_request::RecordPaymentRequest,
        update_payment_request::UpdatePaymentRequest,
    },
    roles::{
        create_role_request::CreateRoleRequest,
        role_dto::RoleDto,
        role_list_response::RoleListResponse,
        role_response::RoleResponse,
        update_role_request::UpdateRoleRequest,
    },
    teams::{
        create_team_request::CreateTeamRequest,
        team_dto::TeamDto,
        team_list_response::TeamListResponse,
        team_response::TeamResponse,
        update_team_request::UpdateTeamRequest,
    },
    transport::{
        bus_route_dto::BusRouteDto,
        bus_route_list_response::BusRouteListResponse,
        create_bus_route_request::CreateBusRouteRequest,
        create_transport_zone_request::CreateTransportZoneRequest,
        transport_zone_dto::TransportZoneDto,
        transport_zone_list_response::TransportZoneListResponse,
        update_bus_route_request::UpdateBusRouteRequest,
        update_transport_zone_request::UpdateTransportZoneRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
