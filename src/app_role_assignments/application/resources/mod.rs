pub mod app_role_assignment_resource_impl;
