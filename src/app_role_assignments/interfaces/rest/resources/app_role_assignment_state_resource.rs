use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app_role_assignments::domain::model::entities::app_role_assignment::AppRoleAssignment;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct AppRoleAssignmentStateResource {
    pub id: String,
    pub app_role_id: String,
    pub principal_object_id: String,
    pub principal_display_name: String,
    pub principal_type: String,
    pub resource_object_id: String,
    pub resource_display_name: String,
}

impl From<&AppRoleAssignment> for AppRoleAssignmentStateResource {
    fn from(assignment: &AppRoleAssignment) -> Self {
        Self {
            id: assignment.id().to_string(),
            app_role_id: assignment.app_role_id().to_string(),
            principal_object_id: assignment.principal_object_id().to_string(),
            principal_display_name: assignment.principal_display_name().to_string(),
            principal_type: assignment.principal_type().to_string(),
            resource_object_id: assignment.resource_object_id().to_string(),
            resource_display_name: assignment.resource_display_name().to_string(),
        }
    }
}

/// `state` is null when the assignment was removed outside of the host.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReadAppRoleAssignmentResponseResource {
    pub state: Option<AppRoleAssignmentStateResource>,
}
