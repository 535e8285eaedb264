use crate::app_role_assignments::domain::model::{
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    value_objects::app_role_assignment_id::AppRoleAssignmentId,
};

#[derive(Clone, Debug)]
pub struct ImportAppRoleAssignmentQuery {
    id: AppRoleAssignmentId,
}

impl ImportAppRoleAssignmentQuery {
    pub fn new(id: String) -> Result<Self, AppRoleAssignmentDomainError> {
        Ok(Self {
            id: AppRoleAssignmentId::parse(&id)?,
        })
    }

    pub fn id(&self) -> &AppRoleAssignmentId {
        &self.id
    }
}
