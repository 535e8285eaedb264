use crate::app_role_assignments::domain::model::{
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    value_objects::app_role_assignment_id::AppRoleAssignmentId,
};

#[derive(Clone, Debug)]
pub struct ReadAppRoleAssignmentQuery {
    id: AppRoleAssignmentId,
}

impl ReadAppRoleAssignmentQuery {
    pub fn new(id: String) -> Result<Self, AppRoleAssignmentDomainError> {
        Ok(Self {
            id: AppRoleAssignmentId::parse(&id)?,
        })
    }

    pub fn from_id(id: AppRoleAssignmentId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &AppRoleAssignmentId {
        &self.id
    }
}
