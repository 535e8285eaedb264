use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_role_assignments::{
    domain::model::value_objects::resource_object_id::ResourceObjectId,
    infrastructure::graph::{
        clients::service_principal_client::{ServicePrincipalClient, ServicePrincipalRecord},
        graph_client_error::GraphClientError,
        graph_http_client::GraphHttpClient,
    },
};

pub struct HttpServicePrincipalClientImpl {
    graph_client: Arc<GraphHttpClient>,
}

impl HttpServicePrincipalClientImpl {
    pub fn new(graph_client: Arc<GraphHttpClient>) -> Self {
        Self { graph_client }
    }
}

#[async_trait]
impl ServicePrincipalClient for HttpServicePrincipalClientImpl {
    #[instrument(skip(self), fields(service_principal_id = %id))]
    async fn get_service_principal(
        &self,
        id: &ResourceObjectId,
    ) -> Result<ServicePrincipalRecord, GraphClientError> {
        let id = id.to_string();
        self.graph_client
            .get(&["servicePrincipals", id.as_str()])
            .await
    }
}
