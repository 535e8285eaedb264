use app_role_assignment_provider::{
    app_role_assignments::{
        build_app_role_assignment_router,
        interfaces::rest::resources::{
            app_role_assignment_id_request_resource::{
                AppRoleAssignmentIdQueryResource, ImportAppRoleAssignmentRequestResource,
            },
            app_role_assignment_state_resource::{
                AppRoleAssignmentStateResource, ReadAppRoleAssignmentResponseResource,
            },
            create_app_role_assignment_request_resource::CreateAppRoleAssignmentRequestResource,
            diagnostics_response_resource::{DiagnosticResource, DiagnosticsResponseResource},
            resource_schema_resource::{
                ResourceSchemaResource, ResourceTimeoutsResource, SchemaAttributeResource,
            },
        },
    },
    config::app_config::AppConfig,
};
use axum::Router;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        app_role_assignment_provider::app_role_assignments::interfaces::rest::controllers::app_role_assignment_rest_controller::get_app_role_assignment_schema,
        app_role_assignment_provider::app_role_assignments::interfaces::rest::controllers::app_role_assignment_rest_controller::create_app_role_assignment,
        app_role_assignment_provider::app_role_assignments::interfaces::rest::controllers::app_role_assignment_rest_controller::read_app_role_assignment,
        app_role_assignment_provider::app_role_assignments::interfaces::rest::controllers::app_role_assignment_rest_controller::delete_app_role_assignment,
        app_role_assignment_provider::app_role_assignments::interfaces::rest::controllers::app_role_assignment_rest_controller::import_app_role_assignment
    ),
    components(
        schemas(
            CreateAppRoleAssignmentRequestResource,
            AppRoleAssignmentIdQueryResource,
            ImportAppRoleAssignmentRequestResource,
            AppRoleAssignmentStateResource,
            ReadAppRoleAssignmentResponseResource,
            DiagnosticResource,
            DiagnosticsResponseResource,
            SchemaAttributeResource,
            ResourceTimeoutsResource,
            ResourceSchemaResource
        )
    ),
    tags(
        (name = "app-role-assignment", description = "App role assignment resource lifecycle")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let app_role_assignment_router = build_app_role_assignment_router(&config)
        .expect("failed to build app role assignment router");

    let app = Router::new()
        .merge(app_role_assignment_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(%addr, "app role assignment provider listening");
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
