use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_role_assignments::{
    domain::model::value_objects::{
        app_role_assignment_id::AppRoleAssignmentId, resource_object_id::ResourceObjectId,
    },
    infrastructure::graph::{
        clients::app_role_assigned_to_client::{
            AppRoleAssignedToClient, AppRoleAssignmentRecord, NewAppRoleAssignmentRecord,
        },
        graph_client_error::GraphClientError,
        graph_http_client::GraphHttpClient,
    },
};

const SERVICE_PRINCIPALS: &str = "servicePrincipals";
const APP_ROLE_ASSIGNED_TO: &str = "appRoleAssignedTo";

pub struct HttpAppRoleAssignedToClientImpl {
    graph_client: Arc<GraphHttpClient>,
}

impl HttpAppRoleAssignedToClientImpl {
    pub fn new(graph_client: Arc<GraphHttpClient>) -> Self {
        Self { graph_client }
    }
}

#[async_trait]
impl AppRoleAssignedToClient for HttpAppRoleAssignedToClientImpl {
    #[instrument(skip(self, record), fields(service_principal_id = %resource_object_id))]
    async fn create_app_role_assigned_to(
        &self,
        resource_object_id: &ResourceObjectId,
        record: &NewAppRoleAssignmentRecord,
    ) -> Result<AppRoleAssignmentRecord, GraphClientError> {
        let resource_object_id = resource_object_id.to_string();
        self.graph_client
            .post(
                &[
                    SERVICE_PRINCIPALS,
                    resource_object_id.as_str(),
                    APP_ROLE_ASSIGNED_TO,
                ],
                record,
            )
            .await
    }

    #[instrument(skip(self), fields(app_role_assignment_id = %id))]
    async fn get_app_role_assigned_to(
        &self,
        id: &AppRoleAssignmentId,
    ) -> Result<AppRoleAssignmentRecord, GraphClientError> {
        let resource_object_id = id.resource_object_id().to_string();
        self.graph_client
            .get(&[
                SERVICE_PRINCIPALS,
                resource_object_id.as_str(),
                APP_ROLE_ASSIGNED_TO,
                id.assignment_id().value(),
            ])
            .await
    }

    #[instrument(skip(self), fields(app_role_assignment_id = %id))]
    async fn delete_app_role_assigned_to(
        &self,
        id: &AppRoleAssignmentId,
    ) -> Result<(), GraphClientError> {
        let resource_object_id = id.resource_object_id().to_string();
        self.graph_client
            .delete(&[
                SERVICE_PRINCIPALS,
                resource_object_id.as_str(),
                APP_ROLE_ASSIGNED_TO,
                id.assignment_id().value(),
            ])
            .await
    }
}
