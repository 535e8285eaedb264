pub mod app_role_assignment_command_service_impl;
