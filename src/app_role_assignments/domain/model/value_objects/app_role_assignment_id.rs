use std::{fmt, str::FromStr};

use crate::app_role_assignments::domain::model::{
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    value_objects::{assignment_id::AssignmentId, resource_object_id::ResourceObjectId},
};

const SEPARATOR: char = '/';

/// Composite handle `{resource_object_id}/{assignment_id}` the host stores for an assignment.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AppRoleAssignmentId {
    resource_object_id: ResourceObjectId,
    assignment_id: AssignmentId,
}

impl AppRoleAssignmentId {
    pub fn new(resource_object_id: ResourceObjectId, assignment_id: AssignmentId) -> Self {
        Self {
            resource_object_id,
            assignment_id,
        }
    }

    /// The resource segment must be a lowercase hyphenated UUID; everything after the first
    /// separator is the assignment id, verbatim. Nothing is trimmed, so a parsed id always
    /// renders back to exactly the input.
    pub fn parse(value: &str) -> Result<Self, AppRoleAssignmentDomainError> {
        let (resource_segment, assignment_segment) =
            value.split_once(SEPARATOR).ok_or_else(|| {
                AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(format!(
                    "{value:?} does not have the form {{resourceObjectId}}/{{assignmentId}}"
                ))
            })?;

        let resource_object_id = ResourceObjectId::new(resource_segment.to_string())
            .map_err(|_| {
                AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(format!(
                    "resource segment {resource_segment:?} of {value:?} is not a UUID"
                ))
            })?;
        if resource_object_id.to_string() != resource_segment {
            return Err(AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(format!(
                "resource segment {resource_segment:?} of {value:?} is not a lowercase UUID"
            )));
        }
        let assignment_id = AssignmentId::new(assignment_segment.to_string()).map_err(|_| {
            AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(format!(
                "assignment segment of {value:?} is empty or padded with whitespace"
            ))
        })?;

        Ok(Self::new(resource_object_id, assignment_id))
    }

    pub fn resource_object_id(&self) -> &ResourceObjectId {
        &self.resource_object_id
    }

    pub fn assignment_id(&self) -> &AssignmentId {
        &self.assignment_id
    }
}

impl fmt::Display for AppRoleAssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.resource_object_id, SEPARATOR, self.assignment_id
        )
    }
}

impl FromStr for AppRoleAssignmentId {
    type Err = AppRoleAssignmentDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}
