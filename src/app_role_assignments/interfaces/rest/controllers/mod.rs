pub mod app_role_assignment_rest_controller;
