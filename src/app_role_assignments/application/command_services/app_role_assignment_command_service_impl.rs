use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::app_role_assignments::{
    domain::{
        model::{
            commands::{
                create_app_role_assignment_command::CreateAppRoleAssignmentCommand,
                delete_app_role_assignment_command::DeleteAppRoleAssignmentCommand,
            },
            enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
            value_objects::{
                app_role_assignment_id::AppRoleAssignmentId, assignment_id::AssignmentId,
                resource_object_id::ResourceObjectId,
            },
        },
        services::app_role_assignment_command_service::AppRoleAssignmentCommandService,
    },
    infrastructure::graph::clients::{
        app_role_assigned_to_client::{
            AppRoleAssignedToClient, AppRoleAssignmentRecord, NewAppRoleAssignmentRecord,
        },
        service_principal_client::ServicePrincipalClient,
    },
};

pub struct AppRoleAssignmentCommandServiceImpl {
    service_principal_client: Arc<dyn ServicePrincipalClient>,
    assigned_to_client: Arc<dyn AppRoleAssignedToClient>,
}

impl AppRoleAssignmentCommandServiceImpl {
    pub fn new(
        service_principal_client: Arc<dyn ServicePrincipalClient>,
        assigned_to_client: Arc<dyn AppRoleAssignedToClient>,
    ) -> Self {
        Self {
            service_principal_client,
            assigned_to_client,
        }
    }

    async fn ensure_resource_service_principal_exists(
        &self,
        resource_object_id: &ResourceObjectId,
    ) -> Result<(), AppRoleAssignmentDomainError> {
        match self
            .service_principal_client
            .get_service_principal(resource_object_id)
            .await
        {
            Ok(_) => Ok(()),
            Err(error) if error.is_not_found() => {
                Err(AppRoleAssignmentDomainError::ResourceServicePrincipalNotFound {
                    resource_object_id: resource_object_id.to_string(),
                })
            }
            Err(error) => Err(
                AppRoleAssignmentDomainError::ResourceServicePrincipalLookupFailed {
                    resource_object_id: resource_object_id.to_string(),
                    message: error.to_string(),
                },
            ),
        }
    }
}

/// Builds the composite id from the create response. Both keys must be present.
fn created_assignment_id(
    created: AppRoleAssignmentRecord,
) -> Result<AppRoleAssignmentId, AppRoleAssignmentDomainError> {
    let assignment_id = created
        .id
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppRoleAssignmentDomainError::BadApiResponse(
                "ID returned for app role assignment is nil".to_string(),
            )
        })?;

    let resource_id = created
        .resource_id
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppRoleAssignmentDomainError::BadApiResponse(
                "resource ID returned for app role assignment is nil".to_string(),
            )
        })?;

    let resource_object_id = ResourceObjectId::new(resource_id.clone()).map_err(|_| {
        AppRoleAssignmentDomainError::BadApiResponse(format!(
            "resource ID {resource_id:?} returned for app role assignment is not a UUID"
        ))
    })?;

    let assignment_id = AssignmentId::new(assignment_id.clone()).map_err(|_| {
        AppRoleAssignmentDomainError::BadApiResponse(format!(
            "ID {assignment_id:?} returned for app role assignment cannot be stored"
        ))
    })?;

    Ok(AppRoleAssignmentId::new(resource_object_id, assignment_id))
}

#[async_trait]
impl AppRoleAssignmentCommandService for AppRoleAssignmentCommandServiceImpl {
    #[instrument(
        skip(self, command),
        fields(
            app_role_id = %command.app_role_id(),
            principal_object_id = %command.principal_object_id(),
            resource_object_id = %command.resource_object_id(),
        )
    )]
    async fn handle_create(
        &self,
        command: CreateAppRoleAssignmentCommand,
    ) -> Result<AppRoleAssignmentId, AppRoleAssignmentDomainError> {
        self.ensure_resource_service_principal_exists(command.resource_object_id())
            .await?;

        let record = NewAppRoleAssignmentRecord {
            app_role_id: command.app_role_id().to_string(),
            principal_id: command.principal_object_id().to_string(),
            resource_id: command.resource_object_id().to_string(),
        };

        let created = self
            .assigned_to_client
            .create_app_role_assigned_to(command.resource_object_id(), &record)
            .await
            .map_err(|error| AppRoleAssignmentDomainError::CreateFailed(error.to_string()))?;

        let id = created_assignment_id(created)?;
        info!(%id, "created app role assignment");

        Ok(id)
    }

    #[instrument(skip(self, command), fields(id = %command.id()))]
    async fn handle_delete(
        &self,
        command: DeleteAppRoleAssignmentCommand,
    ) -> Result<(), AppRoleAssignmentDomainError> {
        self.assigned_to_client
            .delete_app_role_assigned_to(command.id())
            .await
            .map_err(|error| AppRoleAssignmentDomainError::DeleteFailed {
                id: command.id().to_string(),
                message: error.to_string(),
            })?;

        info!(id = %command.id(), "deleted app role assignment");
        Ok(())
    }
}
