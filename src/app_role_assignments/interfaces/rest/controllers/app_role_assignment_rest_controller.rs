use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::{
    app_role_assignments::{
        application::resources::app_role_assignment_resource_impl::AppRoleAssignmentResource,
        domain::model::{
            commands::create_app_role_assignment_command::CreateAppRoleAssignmentCommand,
            enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
        },
        interfaces::rest::resources::{
            app_role_assignment_id_request_resource::{
                AppRoleAssignmentIdQueryResource, ImportAppRoleAssignmentRequestResource,
            },
            app_role_assignment_state_resource::{
                AppRoleAssignmentStateResource, ReadAppRoleAssignmentResponseResource,
            },
            create_app_role_assignment_request_resource::CreateAppRoleAssignmentRequestResource,
            diagnostics_response_resource::{DiagnosticResource, DiagnosticsResponseResource},
            resource_schema_resource::ResourceSchemaResource,
        },
    },
    shared::domain::{
        model::diagnostic::Diagnostic, services::managed_resource::ManagedResource,
    },
};

type ErrorResponse = (StatusCode, Json<DiagnosticsResponseResource>);

#[derive(Clone)]
pub struct AppRoleAssignmentRestControllerState {
    pub resource: Arc<AppRoleAssignmentResource>,
}

pub fn router(state: AppRoleAssignmentRestControllerState) -> Router {
    Router::new()
        .route(
            "/resources/app-role-assignment",
            post(create_app_role_assignment)
                .get(read_app_role_assignment)
                .delete(delete_app_role_assignment),
        )
        .route(
            "/resources/app-role-assignment/schema",
            get(get_app_role_assignment_schema),
        )
        .route(
            "/resources/app-role-assignment/import",
            post(import_app_role_assignment),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/resources/app-role-assignment/schema",
    tag = "app-role-assignment",
    responses(
        (status = 200, description = "Resource schema", body = ResourceSchemaResource)
    )
)]
pub async fn get_app_role_assignment_schema(
    State(state): State<AppRoleAssignmentRestControllerState>,
) -> Json<ResourceSchemaResource> {
    Json(ResourceSchemaResource::from(&state.resource.schema()))
}

#[utoipa::path(
    post,
    path = "/resources/app-role-assignment",
    tag = "app-role-assignment",
    request_body = CreateAppRoleAssignmentRequestResource,
    responses(
        (status = 201, description = "App role assignment created", body = AppRoleAssignmentStateResource),
        (status = 400, description = "Invalid configuration", body = DiagnosticsResponseResource),
        (status = 404, description = "Resource service principal not found", body = DiagnosticsResponseResource),
        (status = 502, description = "Graph API failure; `id` is set when the assignment was created but not read back", body = DiagnosticsResponseResource),
        (status = 504, description = "Operation timed out; `id` is set when the assignment was created but not read back", body = DiagnosticsResponseResource)
    )
)]
pub async fn create_app_role_assignment(
    State(state): State<AppRoleAssignmentRestControllerState>,
    Json(request): Json<CreateAppRoleAssignmentRequestResource>,
) -> Result<(StatusCode, Json<AppRoleAssignmentStateResource>), ErrorResponse> {
    if let Err(validation_errors) = request.validate() {
        return Err(map_validation_errors(&validation_errors));
    }

    let command = CreateAppRoleAssignmentCommand::new(
        request.app_role_id,
        request.principal_object_id,
        request.resource_object_id,
    )
    .map_err(map_domain_error)?;

    let created = state
        .resource
        .create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(AppRoleAssignmentStateResource::from(&created)),
    ))
}

#[utoipa::path(
    get,
    path = "/resources/app-role-assignment",
    tag = "app-role-assignment",
    params(("id" = String, Query, description = "Composite app role assignment id")),
    responses(
        (status = 200, description = "Current state; null when removed outside of the host", body = ReadAppRoleAssignmentResponseResource),
        (status = 400, description = "Malformed id", body = DiagnosticsResponseResource),
        (status = 502, description = "Graph API failure", body = DiagnosticsResponseResource),
        (status = 504, description = "Operation timed out", body = DiagnosticsResponseResource)
    )
)]
pub async fn read_app_role_assignment(
    State(state): State<AppRoleAssignmentRestControllerState>,
    Query(query): Query<AppRoleAssignmentIdQueryResource>,
) -> Result<Json<ReadAppRoleAssignmentResponseResource>, ErrorResponse> {
    let outcome = state
        .resource
        .read(query.id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ReadAppRoleAssignmentResponseResource {
        state: outcome
            .into_state()
            .as_ref()
            .map(AppRoleAssignmentStateResource::from),
    }))
}

#[utoipa::path(
    delete,
    path = "/resources/app-role-assignment",
    tag = "app-role-assignment",
    params(("id" = String, Query, description = "Composite app role assignment id")),
    responses(
        (status = 204, description = "App role assignment deleted"),
        (status = 400, description = "Malformed id", body = DiagnosticsResponseResource),
        (status = 502, description = "Graph API failure", body = DiagnosticsResponseResource),
        (status = 504, description = "Operation timed out", body = DiagnosticsResponseResource)
    )
)]
pub async fn delete_app_role_assignment(
    State(state): State<AppRoleAssignmentRestControllerState>,
    Query(query): Query<AppRoleAssignmentIdQueryResource>,
) -> Result<StatusCode, ErrorResponse> {
    state
        .resource
        .delete(query.id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/resources/app-role-assignment/import",
    tag = "app-role-assignment",
    request_body = ImportAppRoleAssignmentRequestResource,
    responses(
        (status = 200, description = "Imported state", body = AppRoleAssignmentStateResource),
        (status = 400, description = "Malformed id", body = DiagnosticsResponseResource),
        (status = 404, description = "App role assignment does not exist", body = DiagnosticsResponseResource),
        (status = 502, description = "Graph API failure", body = DiagnosticsResponseResource)
    )
)]
pub async fn import_app_role_assignment(
    State(state): State<AppRoleAssignmentRestControllerState>,
    Json(request): Json<ImportAppRoleAssignmentRequestResource>,
) -> Result<Json<AppRoleAssignmentStateResource>, ErrorResponse> {
    if let Err(validation_errors) = request.validate() {
        return Err(map_validation_errors(&validation_errors));
    }

    let imported = state
        .resource
        .import(request.id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AppRoleAssignmentStateResource::from(&imported)))
}

fn map_validation_errors(errors: &ValidationErrors) -> ErrorResponse {
    let mut diagnostics: Vec<DiagnosticResource> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                DiagnosticResource::from(
                    &Diagnostic::error("Invalid configuration value", detail)
                        .with_attribute_path(field.clone()),
                )
            })
        })
        .collect();
    diagnostics.sort_by(|left, right| left.attribute_path.cmp(&right.attribute_path));

    (
        StatusCode::BAD_REQUEST,
        Json(DiagnosticsResponseResource {
            id: None,
            diagnostics,
        }),
    )
}

fn status_for(error: &AppRoleAssignmentDomainError) -> StatusCode {
    match error {
        AppRoleAssignmentDomainError::InvalidAppRoleId
        | AppRoleAssignmentDomainError::InvalidPrincipalObjectId
        | AppRoleAssignmentDomainError::InvalidResourceObjectId
        | AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(_) => StatusCode::BAD_REQUEST,
        AppRoleAssignmentDomainError::ResourceServicePrincipalNotFound { .. }
        | AppRoleAssignmentDomainError::ImportTargetNotFound(_) => StatusCode::NOT_FOUND,
        AppRoleAssignmentDomainError::ResourceServicePrincipalLookupFailed { .. }
        | AppRoleAssignmentDomainError::CreateFailed(_)
        | AppRoleAssignmentDomainError::BadApiResponse(_)
        | AppRoleAssignmentDomainError::CreatedAssignmentNotReadable(_)
        | AppRoleAssignmentDomainError::ReadFailed { .. }
        | AppRoleAssignmentDomainError::DeleteFailed { .. } => StatusCode::BAD_GATEWAY,
        AppRoleAssignmentDomainError::CreatedStateUnavailable { source, .. } => status_for(source),
        AppRoleAssignmentDomainError::OperationTimedOut { .. } => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn map_domain_error(error: AppRoleAssignmentDomainError) -> ErrorResponse {
    let status = status_for(&error);

    warn!(%status, error = %error, "app role assignment request failed");

    (
        status,
        Json(DiagnosticsResponseResource {
            id: error.created_id().map(ToString::to_string),
            diagnostics: vec![DiagnosticResource::from(&error.to_diagnostic())],
        }),
    )
}
