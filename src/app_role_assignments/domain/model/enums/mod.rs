pub mod app_role_assignment_domain_error;
