use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app_role_assignments::{
    domain::model::value_objects::{
        app_role_assignment_id::AppRoleAssignmentId, resource_object_id::ResourceObjectId,
    },
    infrastructure::graph::graph_client_error::GraphClientError,
};

/// `appRoleAssignment` as returned by Graph. Every property may be absent or null.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppRoleAssignmentRecord {
    pub id: Option<String>,
    pub app_role_id: Option<String>,
    pub principal_id: Option<String>,
    pub principal_display_name: Option<String>,
    pub principal_type: Option<String>,
    pub resource_id: Option<String>,
    pub resource_display_name: Option<String>,
    pub created_date_time: Option<String>,
    pub deleted_date_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAppRoleAssignmentRecord {
    pub app_role_id: String,
    pub principal_id: String,
    pub resource_id: String,
}

#[async_trait]
pub trait AppRoleAssignedToClient: Send + Sync {
    async fn create_app_role_assigned_to(
        &self,
        resource_object_id: &ResourceObjectId,
        record: &NewAppRoleAssignmentRecord,
    ) -> Result<AppRoleAssignmentRecord, GraphClientError>;

    async fn get_app_role_assigned_to(
        &self,
        id: &AppRoleAssignmentId,
    ) -> Result<AppRoleAssignmentRecord, GraphClientError>;

    async fn delete_app_role_assigned_to(
        &self,
        id: &AppRoleAssignmentId,
    ) -> Result<(), GraphClientError>;
}
