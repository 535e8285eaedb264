pub mod app_role_assignments;
pub mod config;
pub mod shared;
