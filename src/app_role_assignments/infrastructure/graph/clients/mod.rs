pub mod app_role_assigned_to_client;
pub mod http;
pub mod service_principal_client;
