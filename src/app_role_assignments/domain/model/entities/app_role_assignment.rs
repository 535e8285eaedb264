use crate::app_role_assignments::domain::model::value_objects::app_role_assignment_id::AppRoleAssignmentId;

/// Server-authoritative view of an assignment.
///
/// Mirrored and computed attributes are kept as plain strings: the remote record may omit any
/// of them, in which case they hold the empty string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppRoleAssignment {
    id: AppRoleAssignmentId,
    app_role_id: String,
    principal_object_id: String,
    principal_display_name: String,
    principal_type: String,
    resource_object_id: String,
    resource_display_name: String,
}

impl AppRoleAssignment {
    pub fn restore(
        id: AppRoleAssignmentId,
        app_role_id: String,
        principal_object_id: String,
        principal_display_name: String,
        principal_type: String,
        resource_object_id: String,
        resource_display_name: String,
    ) -> Self {
        Self {
            id,
            app_role_id,
            principal_object_id,
            principal_display_name,
            principal_type,
            resource_object_id,
            resource_display_name,
        }
    }

    pub fn id(&self) -> &AppRoleAssignmentId {
        &self.id
    }

    pub fn app_role_id(&self) -> &str {
        &self.app_role_id
    }

    pub fn principal_object_id(&self) -> &str {
        &self.principal_object_id
    }

    pub fn principal_display_name(&self) -> &str {
        &self.principal_display_name
    }

    pub fn principal_type(&self) -> &str {
        &self.principal_type
    }

    pub fn resource_object_id(&self) -> &str {
        &self.resource_object_id
    }

    pub fn resource_display_name(&self) -> &str {
        &self.resource_display_name
    }
}
