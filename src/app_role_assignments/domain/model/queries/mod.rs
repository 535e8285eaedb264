pub mod import_app_role_assignment_query;
pub mod read_app_role_assignment_query;
