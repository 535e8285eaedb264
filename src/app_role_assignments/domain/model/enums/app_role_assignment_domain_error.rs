use thiserror::Error;

use crate::{
    app_role_assignments::domain::model::value_objects::app_role_assignment_id::AppRoleAssignmentId,
    shared::domain::model::diagnostic::Diagnostic,
};

#[derive(Debug, Error)]
pub enum AppRoleAssignmentDomainError {
    #[error("app role id is invalid; expected a UUID")]
    InvalidAppRoleId,

    #[error("principal object id is invalid; expected a UUID")]
    InvalidPrincipalObjectId,

    #[error("resource object id is invalid; expected a UUID")]
    InvalidResourceObjectId,

    #[error("app role assignment id is invalid: {0}")]
    InvalidAppRoleAssignmentId(String),

    #[error("service principal not found for resource (object id: {resource_object_id:?})")]
    ResourceServicePrincipalNotFound { resource_object_id: String },

    #[error(
        "could not retrieve service principal for resource (object id: {resource_object_id:?}): {message}"
    )]
    ResourceServicePrincipalLookupFailed {
        resource_object_id: String,
        message: String,
    },

    #[error("could not create app role assignment: {0}")]
    CreateFailed(String),

    #[error("bad API response: {0}")]
    BadApiResponse(String),

    #[error("app role assignment {0} was created but could not be read back")]
    CreatedAssignmentNotReadable(String),

    /// The remote assignment exists under `id` but its state could not be read afterwards.
    #[error("app role assignment {id} was created but its state is unavailable: {source}")]
    CreatedStateUnavailable {
        id: AppRoleAssignmentId,
        source: Box<AppRoleAssignmentDomainError>,
    },

    #[error("retrieving app role assignment {id}: {message}")]
    ReadFailed { id: String, message: String },

    #[error("deleting app role assignment {id}: {message}")]
    DeleteFailed { id: String, message: String },

    #[error("cannot import non-existent app role assignment {0}")]
    ImportTargetNotFound(String),

    #[error("{operation} of app role assignment timed out after {timeout_secs}s")]
    OperationTimedOut {
        operation: &'static str,
        timeout_secs: u64,
    },
}

impl AppRoleAssignmentDomainError {
    /// Configuration attribute the error is reported against, if any.
    pub fn attribute_path(&self) -> Option<&'static str> {
        match self {
            Self::InvalidAppRoleId => Some("app_role_id"),
            Self::InvalidPrincipalObjectId => Some("principal_object_id"),
            Self::InvalidResourceObjectId => Some("resource_object_id"),
            Self::InvalidAppRoleAssignmentId(_)
            | Self::DeleteFailed { .. }
            | Self::ImportTargetNotFound(_) => Some("id"),
            Self::ResourceServicePrincipalNotFound { .. } => Some("principal_object_id"),
            Self::CreatedStateUnavailable { source, .. } => source.attribute_path(),
            Self::ResourceServicePrincipalLookupFailed { .. }
            | Self::CreateFailed(_)
            | Self::BadApiResponse(_)
            | Self::CreatedAssignmentNotReadable(_)
            | Self::ReadFailed { .. }
            | Self::OperationTimedOut { .. } => None,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::InvalidAppRoleId
            | Self::InvalidPrincipalObjectId
            | Self::InvalidResourceObjectId => "Invalid configuration value",
            Self::InvalidAppRoleAssignmentId(_) => "Parsing app role assignment ID",
            Self::ResourceServicePrincipalNotFound { .. } => {
                "Service principal not found for resource"
            }
            Self::ResourceServicePrincipalLookupFailed { .. } => {
                "Could not retrieve service principal for resource"
            }
            Self::CreateFailed(_) | Self::CreatedAssignmentNotReadable(_) => {
                "Could not create app role assignment"
            }
            Self::BadApiResponse(_) => "Bad API response",
            Self::CreatedStateUnavailable { source, .. } => source.summary(),
            Self::ReadFailed { .. } => "Retrieving app role assignment",
            Self::DeleteFailed { .. } => "Deleting app role assignment",
            Self::ImportTargetNotFound(_) => "Importing app role assignment",
            Self::OperationTimedOut { .. } => "Operation timed out",
        }
    }

    /// Id of a remote assignment this failed operation left behind.
    pub fn created_id(&self) -> Option<&AppRoleAssignmentId> {
        match self {
            Self::CreatedStateUnavailable { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.summary(), self.to_string());
        match self.attribute_path() {
            Some(path) => diagnostic.with_attribute_path(path),
            None => diagnostic,
        }
    }
}
