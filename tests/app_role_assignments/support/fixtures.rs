use app_role_assignment_provider::app_role_assignments::{
    domain::model::commands::create_app_role_assignment_command::CreateAppRoleAssignmentCommand,
    infrastructure::graph::clients::app_role_assigned_to_client::AppRoleAssignmentRecord,
};

pub const APP_ROLE_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const PRINCIPAL_OBJECT_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const RESOURCE_OBJECT_ID: &str = "33333333-3333-3333-3333-333333333333";
pub const MISSING_RESOURCE_OBJECT_ID: &str = "44444444-4444-4444-4444-444444444444";
pub const EXISTING_ASSIGNMENT_ID: &str = "AAECAwQFBgcICQoLDA0ODw";

pub fn create_command() -> CreateAppRoleAssignmentCommand {
    create_command_for_resource(RESOURCE_OBJECT_ID)
}

pub fn create_command_for_resource(resource_object_id: &str) -> CreateAppRoleAssignmentCommand {
    CreateAppRoleAssignmentCommand::new(
        APP_ROLE_ID.to_string(),
        PRINCIPAL_OBJECT_ID.to_string(),
        resource_object_id.to_string(),
    )
    .expect("fixture command should be valid")
}

pub fn existing_assignment_id() -> String {
    format!("{RESOURCE_OBJECT_ID}/{EXISTING_ASSIGNMENT_ID}")
}

pub fn existing_assignment_record() -> AppRoleAssignmentRecord {
    AppRoleAssignmentRecord {
        id: Some(EXISTING_ASSIGNMENT_ID.to_string()),
        app_role_id: Some(APP_ROLE_ID.to_string()),
        principal_id: Some(PRINCIPAL_OBJECT_ID.to_string()),
        principal_display_name: Some("Alice".to_string()),
        principal_type: Some("User".to_string()),
        resource_id: Some(RESOURCE_OBJECT_ID.to_string()),
        resource_display_name: Some("Inventory API".to_string()),
        created_date_time: Some("2024-01-15T10:00:00Z".to_string()),
        deleted_date_time: None,
    }
}
