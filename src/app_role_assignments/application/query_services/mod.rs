pub mod app_role_assignment_query_service_impl;
