use async_trait::async_trait;

use crate::app_role_assignments::domain::model::{
    commands::{
        create_app_role_assignment_command::CreateAppRoleAssignmentCommand,
        delete_app_role_assignment_command::DeleteAppRoleAssignmentCommand,
    },
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    value_objects::app_role_assignment_id::AppRoleAssignmentId,
};

#[async_trait]
pub trait AppRoleAssignmentCommandService: Send + Sync {
    /// Creates the remote assignment and returns the id the host must store. The state is
    /// read separately so that a failed read never loses the id.
    async fn handle_create(
        &self,
        command: CreateAppRoleAssignmentCommand,
    ) -> Result<AppRoleAssignmentId, AppRoleAssignmentDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteAppRoleAssignmentCommand,
    ) -> Result<(), AppRoleAssignmentDomainError>;
}
