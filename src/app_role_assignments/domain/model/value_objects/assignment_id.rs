use std::fmt;

use crate::app_role_assignments::domain::model::enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError;

/// Server-allocated key of an assignment record under its resource service principal.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AssignmentId(String);

impl AssignmentId {
    pub fn new(value: String) -> Result<Self, AppRoleAssignmentDomainError> {
        if value.is_empty() {
            return Err(AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(
                "assignment id is empty".to_string(),
            ));
        }
        if value.trim() != value {
            return Err(AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(format!(
                "assignment id {value:?} has surrounding whitespace"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
