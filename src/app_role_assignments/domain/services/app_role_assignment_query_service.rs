use async_trait::async_trait;

use crate::app_role_assignments::domain::model::{
    entities::app_role_assignment::AppRoleAssignment,
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    queries::{
        import_app_role_assignment_query::ImportAppRoleAssignmentQuery,
        read_app_role_assignment_query::ReadAppRoleAssignmentQuery,
    },
};

#[async_trait]
pub trait AppRoleAssignmentQueryService: Send + Sync {
    /// `Ok(None)` means the assignment no longer exists remotely.
    async fn handle_read(
        &self,
        query: ReadAppRoleAssignmentQuery,
    ) -> Result<Option<AppRoleAssignment>, AppRoleAssignmentDomainError>;

    async fn handle_import(
        &self,
        query: ImportAppRoleAssignmentQuery,
    ) -> Result<AppRoleAssignment, AppRoleAssignmentDomainError>;
}
