use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::app_role_assignments::{
    domain::{
        model::{
            entities::app_role_assignment::AppRoleAssignment,
            enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
            queries::{
                import_app_role_assignment_query::ImportAppRoleAssignmentQuery,
                read_app_role_assignment_query::ReadAppRoleAssignmentQuery,
            },
            value_objects::app_role_assignment_id::AppRoleAssignmentId,
        },
        services::app_role_assignment_query_service::AppRoleAssignmentQueryService,
    },
    infrastructure::graph::clients::app_role_assigned_to_client::{
        AppRoleAssignedToClient, AppRoleAssignmentRecord,
    },
};

pub struct AppRoleAssignmentQueryServiceImpl {
    assigned_to_client: Arc<dyn AppRoleAssignedToClient>,
}

impl AppRoleAssignmentQueryServiceImpl {
    pub fn new(assigned_to_client: Arc<dyn AppRoleAssignedToClient>) -> Self {
        Self { assigned_to_client }
    }
}

fn to_entity(id: AppRoleAssignmentId, record: AppRoleAssignmentRecord) -> AppRoleAssignment {
    AppRoleAssignment::restore(
        id,
        record.app_role_id.unwrap_or_default(),
        record.principal_id.unwrap_or_default(),
        record.principal_display_name.unwrap_or_default(),
        record.principal_type.unwrap_or_default(),
        record.resource_id.unwrap_or_default(),
        record.resource_display_name.unwrap_or_default(),
    )
}

#[async_trait]
impl AppRoleAssignmentQueryService for AppRoleAssignmentQueryServiceImpl {
    #[instrument(skip(self, query), fields(id = %query.id()))]
    async fn handle_read(
        &self,
        query: ReadAppRoleAssignmentQuery,
    ) -> Result<Option<AppRoleAssignment>, AppRoleAssignmentDomainError> {
        match self
            .assigned_to_client
            .get_app_role_assigned_to(query.id())
            .await
        {
            Ok(record) => Ok(Some(to_entity(query.id().clone(), record))),
            Err(error) if error.is_not_found() => {
                debug!(id = %query.id(), "app role assignment was not found - removing from state");
                Ok(None)
            }
            Err(error) => Err(AppRoleAssignmentDomainError::ReadFailed {
                id: query.id().to_string(),
                message: error.to_string(),
            }),
        }
    }

    async fn handle_import(
        &self,
        query: ImportAppRoleAssignmentQuery,
    ) -> Result<AppRoleAssignment, AppRoleAssignmentDomainError> {
        let id = query.id().clone();

        self.handle_read(ReadAppRoleAssignmentQuery::from_id(id.clone()))
            .await?
            .ok_or_else(|| AppRoleAssignmentDomainError::ImportTargetNotFound(id.to_string()))
    }
}
