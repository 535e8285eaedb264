pub mod create_app_role_assignment_command;
pub mod delete_app_role_assignment_command;
