use async_trait::async_trait;
use serde::Deserialize;

use crate::app_role_assignments::{
    domain::model::value_objects::resource_object_id::ResourceObjectId,
    infrastructure::graph::graph_client_error::GraphClientError,
};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipalRecord {
    pub id: Option<String>,
    pub app_id: Option<String>,
    pub display_name: Option<String>,
}

#[async_trait]
pub trait ServicePrincipalClient: Send + Sync {
    async fn get_service_principal(
        &self,
        id: &ResourceObjectId,
    ) -> Result<ServicePrincipalRecord, GraphClientError>;
}
