use std::{sync::Arc, time::Duration};

use app_role_assignment_provider::app_role_assignments::{
    domain::model::value_objects::{
        app_role_assignment_id::AppRoleAssignmentId, resource_object_id::ResourceObjectId,
    },
    infrastructure::graph::{
        access_token_provider::{
            AccessTokenProvider, ClientCredentialsTokenProvider, GraphCredentials,
        },
        clients::{
            app_role_assigned_to_client::{AppRoleAssignedToClient, NewAppRoleAssignmentRecord},
            http::{
                http_app_role_assigned_to_client_impl::HttpAppRoleAssignedToClientImpl,
                http_service_principal_client_impl::HttpServicePrincipalClientImpl,
            },
            service_principal_client::ServicePrincipalClient,
        },
        graph_client_error::GraphClientError,
        graph_http_client::GraphHttpClient,
    },
};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path},
};

const RESOURCE_OBJECT_ID: &str = "33333333-3333-3333-3333-333333333333";
const ASSIGNMENT_ID: &str = "AAECAwQFBgcICQoLDA0ODw";
const ASSIGNMENTS_PATH: &str =
    "/v1.0/servicePrincipals/33333333-3333-3333-3333-333333333333/appRoleAssignedTo";

struct StaticTokenProvider;

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, GraphClientError> {
        Ok("test-token".to_string())
    }
}

fn graph_client(server: &MockServer) -> Arc<GraphHttpClient> {
    Arc::new(
        GraphHttpClient::new(
            Arc::new(StaticTokenProvider),
            &server.uri(),
            "v1.0",
            Duration::from_secs(5),
        )
        .expect("client should build"),
    )
}

fn resource_object_id() -> ResourceObjectId {
    ResourceObjectId::new(RESOURCE_OBJECT_ID.to_string()).expect("valid resource id")
}

fn assignment_id() -> AppRoleAssignmentId {
    AppRoleAssignmentId::parse(&format!("{RESOURCE_OBJECT_ID}/{ASSIGNMENT_ID}"))
        .expect("valid assignment id")
}

#[tokio::test]
async fn service_principal_lookup_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{RESOURCE_OBJECT_ID}")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": RESOURCE_OBJECT_ID,
            "appId": "55555555-5555-5555-5555-555555555555",
            "displayName": "Inventory API"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpServicePrincipalClientImpl::new(graph_client(&server));
    let record = client
        .get_service_principal(&resource_object_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(record.id.as_deref(), Some(RESOURCE_OBJECT_ID));
    assert_eq!(record.display_name.as_deref(), Some("Inventory API"));
}

#[tokio::test]
async fn missing_service_principal_is_reported_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{RESOURCE_OBJECT_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "Request_ResourceNotFound",
                "message": "Resource does not exist."
            }
        })))
        .mount(&server)
        .await;

    let client = HttpServicePrincipalClientImpl::new(graph_client(&server));
    let error = client
        .get_service_principal(&resource_object_id())
        .await
        .expect_err("lookup should fail");

    assert!(error.is_not_found());
    assert!(matches!(
        error,
        GraphClientError::NotFound(ref message) if message == "Resource does not exist."
    ));
}

#[tokio::test]
async fn create_posts_camel_case_body_to_resource_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ASSIGNMENTS_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "appRoleId": "11111111-1111-1111-1111-111111111111",
            "principalId": "22222222-2222-2222-2222-222222222222",
            "resourceId": RESOURCE_OBJECT_ID
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": ASSIGNMENT_ID,
            "appRoleId": "11111111-1111-1111-1111-111111111111",
            "principalId": "22222222-2222-2222-2222-222222222222",
            "principalDisplayName": "Alice",
            "principalType": "User",
            "resourceId": RESOURCE_OBJECT_ID,
            "resourceDisplayName": "Inventory API",
            "createdDateTime": "2024-01-15T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAppRoleAssignedToClientImpl::new(graph_client(&server));
    let created = client
        .create_app_role_assigned_to(
            &resource_object_id(),
            &NewAppRoleAssignmentRecord {
                app_role_id: "11111111-1111-1111-1111-111111111111".to_string(),
                principal_id: "22222222-2222-2222-2222-222222222222".to_string(),
                resource_id: RESOURCE_OBJECT_ID.to_string(),
            },
        )
        .await
        .expect("create should succeed");

    assert_eq!(created.id.as_deref(), Some(ASSIGNMENT_ID));
    assert_eq!(created.principal_type.as_deref(), Some("User"));
    assert_eq!(created.resource_id.as_deref(), Some(RESOURCE_OBJECT_ID));
}

#[tokio::test]
async fn get_decodes_odata_error_for_non_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{ASSIGNMENTS_PATH}/{ASSIGNMENT_ID}")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": "Authorization_RequestDenied",
                "message": "Insufficient privileges to complete the operation."
            }
        })))
        .mount(&server)
        .await;

    let client = HttpAppRoleAssignedToClientImpl::new(graph_client(&server));
    let error = client
        .get_app_role_assigned_to(&assignment_id())
        .await
        .expect_err("get should fail");

    match error {
        GraphClientError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 403);
            assert_eq!(code, "Authorization_RequestDenied");
            assert_eq!(message, "Insufficient privileges to complete the operation.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_tolerates_missing_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{ASSIGNMENTS_PATH}/{ASSIGNMENT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ASSIGNMENT_ID,
            "resourceId": RESOURCE_OBJECT_ID
        })))
        .mount(&server)
        .await;

    let client = HttpAppRoleAssignedToClientImpl::new(graph_client(&server));
    let record = client
        .get_app_role_assigned_to(&assignment_id())
        .await
        .expect("get should succeed");

    assert_eq!(record.id.as_deref(), Some(ASSIGNMENT_ID));
    assert!(record.principal_display_name.is_none());
    assert!(record.app_role_id.is_none());
}

#[tokio::test]
async fn delete_targets_single_assignment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{ASSIGNMENTS_PATH}/{ASSIGNMENT_ID}")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAppRoleAssignedToClientImpl::new(graph_client(&server));
    client
        .delete_app_role_assigned_to(&assignment_id())
        .await
        .expect("delete should succeed");
}

fn token_provider(
    server: &MockServer,
    request_timeout: Duration,
) -> ClientCredentialsTokenProvider {
    ClientCredentialsTokenProvider::new(
        GraphCredentials {
            tenant_id: "tenant-1".to_string(),
            client_id: "client-1".to_string(),
            client_secret: SecretString::from("secret".to_string()),
        },
        &server.uri(),
        "https://graph.microsoft.com",
        request_timeout,
    )
    .expect("provider should build")
}

fn token_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": "issued-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
}

#[tokio::test]
async fn client_credentials_token_is_requested_once_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-1"))
        .respond_with(token_response())
        .expect(1)
        .mount(&server)
        .await;

    let provider = token_provider(&server, Duration::from_secs(5));

    assert_eq!(provider.access_token().await.expect("first token"), "issued-token");
    assert_eq!(provider.access_token().await.expect("cached token"), "issued-token");
}

#[tokio::test]
async fn concurrent_callers_share_one_token_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(token_response().set_delay(Duration::from_millis(100)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = token_provider(&server, Duration::from_secs(5));

    let (first, second, third) = tokio::join!(
        provider.access_token(),
        provider.access_token(),
        provider.access_token()
    );

    for token in [first, second, third] {
        assert_eq!(token.expect("token"), "issued-token");
    }
}

#[tokio::test]
async fn slow_token_endpoint_is_bounded_by_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(token_response().set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let provider = token_provider(&server, Duration::from_millis(100));

    let error = provider
        .access_token()
        .await
        .expect_err("token request should time out");
    assert!(matches!(
        error,
        GraphClientError::Auth(ref message) if message.contains("token request failed")
    ));
}

#[tokio::test]
async fn rejected_token_request_is_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let provider = token_provider(&server, Duration::from_secs(5));

    let error = provider
        .access_token()
        .await
        .expect_err("token request should fail");
    assert!(matches!(error, GraphClientError::Auth(_)));
}
