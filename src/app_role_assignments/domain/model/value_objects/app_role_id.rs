use std::fmt;

use uuid::Uuid;

use crate::app_role_assignments::domain::model::{
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    value_objects::parse_hyphenated_uuid,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AppRoleId(Uuid);

impl AppRoleId {
    pub fn new(value: String) -> Result<Self, AppRoleAssignmentDomainError> {
        parse_hyphenated_uuid(&value)
            .map(Self)
            .ok_or(AppRoleAssignmentDomainError::InvalidAppRoleId)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AppRoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
