use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAppRoleAssignmentRequestResource {
    #[validate(regex(path = *OBJECT_ID_REGEX, message = "expected a UUID"))]
    pub app_role_id: String,

    #[validate(regex(path = *OBJECT_ID_REGEX, message = "expected a UUID"))]
    pub principal_object_id: String,

    #[validate(regex(path = *OBJECT_ID_REGEX, message = "expected a UUID"))]
    pub resource_object_id: String,
}

lazy_static::lazy_static! {
    pub static ref OBJECT_ID_REGEX: regex::Regex = regex::Regex::new(
        "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .expect("valid regex");
}
