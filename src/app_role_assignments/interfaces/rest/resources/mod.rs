pub mod app_role_assignment_id_request_resource;
pub mod app_role_assignment_state_resource;
pub mod create_app_role_assignment_request_resource;
pub mod diagnostics_response_resource;
pub mod resource_schema_resource;
