use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::warn;

use crate::{
    app_role_assignments::domain::{
        model::{
            commands::{
                create_app_role_assignment_command::CreateAppRoleAssignmentCommand,
                delete_app_role_assignment_command::DeleteAppRoleAssignmentCommand,
            },
            entities::app_role_assignment::AppRoleAssignment,
            enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
            queries::{
                import_app_role_assignment_query::ImportAppRoleAssignmentQuery,
                read_app_role_assignment_query::ReadAppRoleAssignmentQuery,
            },
        },
        services::{
            app_role_assignment_command_service::AppRoleAssignmentCommandService,
            app_role_assignment_query_service::AppRoleAssignmentQueryService,
        },
    },
    shared::domain::{
        model::resource_schema::{ResourceSchema, ResourceTimeouts, SchemaAttribute},
        services::managed_resource::{ManagedResource, ReadOutcome},
    },
};

pub const APP_ROLE_ASSIGNMENT_RESOURCE_TYPE: &str = "app_role_assignment";

/// Host-facing handler for `app_role_assignment`, bounding every operation by its timeout.
pub struct AppRoleAssignmentResource {
    command_service: Arc<dyn AppRoleAssignmentCommandService>,
    query_service: Arc<dyn AppRoleAssignmentQueryService>,
    timeouts: ResourceTimeouts,
}

impl AppRoleAssignmentResource {
    pub fn new(
        command_service: Arc<dyn AppRoleAssignmentCommandService>,
        query_service: Arc<dyn AppRoleAssignmentQueryService>,
        timeouts: ResourceTimeouts,
    ) -> Self {
        Self {
            command_service,
            query_service,
            timeouts,
        }
    }
}

/// Deadline shared by every remote call of one operation.
struct OperationBudget {
    operation: &'static str,
    timeout: Duration,
    deadline: Instant,
}

impl OperationBudget {
    fn start(operation: &'static str, timeout: Duration) -> Self {
        Self {
            operation,
            timeout,
            deadline: Instant::now() + timeout,
        }
    }

    async fn run<T, F>(&self, future: F) -> Result<T, AppRoleAssignmentDomainError>
    where
        F: Future<Output = Result<T, AppRoleAssignmentDomainError>>,
    {
        match tokio::time::timeout_at(self.deadline, future).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation = self.operation,
                    timeout = ?self.timeout,
                    "app role assignment operation timed out"
                );
                Err(AppRoleAssignmentDomainError::OperationTimedOut {
                    operation: self.operation,
                    timeout_secs: self.timeout.as_secs(),
                })
            }
        }
    }
}

#[async_trait]
impl ManagedResource for AppRoleAssignmentResource {
    type Config = CreateAppRoleAssignmentCommand;
    type State = AppRoleAssignment;
    type Error = AppRoleAssignmentDomainError;

    fn schema(&self) -> ResourceSchema {
        ResourceSchema::new(APP_ROLE_ASSIGNMENT_RESOURCE_TYPE, self.timeouts)
            .importable()
            .with_attribute(
                SchemaAttribute::required_string(
                    "app_role_id",
                    "The ID of the app role to be assigned",
                )
                .force_new()
                .validated_by("uuid"),
            )
            .with_attribute(
                SchemaAttribute::required_string(
                    "principal_object_id",
                    "The object ID of the user, group or service principal to be assigned this app role",
                )
                .force_new()
                .validated_by("uuid"),
            )
            .with_attribute(
                SchemaAttribute::required_string(
                    "resource_object_id",
                    "The object ID of the service principal representing the resource",
                )
                .force_new()
                .validated_by("uuid"),
            )
            .with_attribute(SchemaAttribute::computed_string(
                "principal_display_name",
                "The display name of the principal to which the app role is assigned",
            ))
            .with_attribute(SchemaAttribute::computed_string(
                "principal_type",
                "The object type of the principal to which the app role is assigned",
            ))
            .with_attribute(SchemaAttribute::computed_string(
                "resource_display_name",
                "The display name of the application representing the resource",
            ))
    }

    async fn create(
        &self,
        config: CreateAppRoleAssignmentCommand,
    ) -> Result<AppRoleAssignment, AppRoleAssignmentDomainError> {
        let budget = OperationBudget::start("create", self.timeouts.create);
        let id = budget.run(self.command_service.handle_create(config)).await?;

        let read_back = budget
            .run(
                self.query_service
                    .handle_read(ReadAppRoleAssignmentQuery::from_id(id.clone())),
            )
            .await
            .and_then(|found| {
                found.ok_or_else(|| {
                    AppRoleAssignmentDomainError::CreatedAssignmentNotReadable(id.to_string())
                })
            });

        read_back.map_err(|source| {
            warn!(%id, error = %source, "created app role assignment could not be read back");
            AppRoleAssignmentDomainError::CreatedStateUnavailable {
                id,
                source: Box::new(source),
            }
        })
    }

    async fn read(
        &self,
        id: String,
    ) -> Result<ReadOutcome<AppRoleAssignment>, AppRoleAssignmentDomainError> {
        let query = ReadAppRoleAssignmentQuery::new(id)?;
        let found = OperationBudget::start("read", self.timeouts.read)
            .run(self.query_service.handle_read(query))
            .await?;

        Ok(match found {
            Some(assignment) => ReadOutcome::Present(assignment),
            None => ReadOutcome::Removed,
        })
    }

    async fn delete(&self, id: String) -> Result<(), AppRoleAssignmentDomainError> {
        let command = DeleteAppRoleAssignmentCommand::new(id)?;
        OperationBudget::start("delete", self.timeouts.delete)
            .run(self.command_service.handle_delete(command))
            .await
    }

    async fn import(&self, id: String) -> Result<AppRoleAssignment, AppRoleAssignmentDomainError> {
        let query = ImportAppRoleAssignmentQuery::new(id)?;
        OperationBudget::start("import", self.timeouts.read)
            .run(self.query_service.handle_import(query))
            .await
    }
}
