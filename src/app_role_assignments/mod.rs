use std::sync::Arc;

use axum::Router;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_role_assignments::{
        application::{
            command_services::app_role_assignment_command_service_impl::AppRoleAssignmentCommandServiceImpl,
            query_services::app_role_assignment_query_service_impl::AppRoleAssignmentQueryServiceImpl,
            resources::app_role_assignment_resource_impl::AppRoleAssignmentResource,
        },
        infrastructure::graph::{
            access_token_provider::{ClientCredentialsTokenProvider, GraphCredentials},
            clients::http::{
                http_app_role_assigned_to_client_impl::HttpAppRoleAssignedToClientImpl,
                http_service_principal_client_impl::HttpServicePrincipalClientImpl,
            },
            graph_cloud_environment::GraphCloudEnvironment,
            graph_http_client::GraphHttpClient,
        },
        interfaces::rest::controllers::app_role_assignment_rest_controller::{
            AppRoleAssignmentRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    shared::domain::model::resource_schema::ResourceTimeouts,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_app_role_assignment_resource(
    config: &AppConfig,
) -> Result<AppRoleAssignmentResource, String> {
    let cloud_environment = config
        .graph_cloud_environment
        .parse::<GraphCloudEnvironment>()
        .map_err(|_| {
            format!(
                "unknown Graph cloud environment {:?}",
                config.graph_cloud_environment
            )
        })?;

    if config.graph_tenant_id.trim().is_empty() || config.graph_client_id.trim().is_empty() {
        return Err("GRAPH_TENANT_ID and GRAPH_CLIENT_ID must be set".to_string());
    }

    let graph_endpoint = config
        .graph_endpoint_override
        .as_deref()
        .unwrap_or(cloud_environment.graph_endpoint());

    let token_provider = Arc::new(
        ClientCredentialsTokenProvider::new(
            GraphCredentials {
                tenant_id: config.graph_tenant_id.clone(),
                client_id: config.graph_client_id.clone(),
                client_secret: SecretString::from(
                    config.graph_client_secret.expose_secret().to_string(),
                ),
            },
            cloud_environment.login_endpoint(),
            cloud_environment.graph_endpoint(),
            config.graph_request_timeout(),
        )
        .map_err(|e| e.to_string())?,
    );

    let graph_client = Arc::new(
        GraphHttpClient::new(
            token_provider,
            graph_endpoint,
            &config.graph_api_version,
            config.graph_request_timeout(),
        )
        .map_err(|e| e.to_string())?,
    );

    let service_principal_client =
        Arc::new(HttpServicePrincipalClientImpl::new(graph_client.clone()));
    let assigned_to_client = Arc::new(HttpAppRoleAssignedToClientImpl::new(graph_client));

    let query_service = Arc::new(AppRoleAssignmentQueryServiceImpl::new(
        assigned_to_client.clone(),
    ));
    let command_service = Arc::new(AppRoleAssignmentCommandServiceImpl::new(
        service_principal_client,
        assigned_to_client,
    ));

    Ok(AppRoleAssignmentResource::new(
        command_service,
        query_service,
        ResourceTimeouts {
            create: config.create_timeout(),
            read: config.read_timeout(),
            delete: config.delete_timeout(),
        },
    ))
}

pub fn build_app_role_assignment_router(config: &AppConfig) -> Result<Router, String> {
    let resource = build_app_role_assignment_resource(config)?;

    Ok(router(AppRoleAssignmentRestControllerState {
        resource: Arc::new(resource),
    }))
}
