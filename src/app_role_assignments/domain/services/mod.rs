pub mod app_role_assignment_command_service;
pub mod app_role_assignment_query_service;
