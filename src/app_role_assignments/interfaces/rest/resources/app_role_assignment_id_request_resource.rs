use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AppRoleAssignmentIdQueryResource {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ImportAppRoleAssignmentRequestResource {
    #[validate(length(min = 1, message = "import id must not be empty"))]
    pub id: String,
}
