pub mod app_role_assignment;
