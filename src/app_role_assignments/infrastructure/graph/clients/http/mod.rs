pub mod http_app_role_assigned_to_client_impl;
pub mod http_service_principal_client_impl;
