use crate::app_role_assignments::domain::model::{
    enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    value_objects::{
        app_role_id::AppRoleId, principal_object_id::PrincipalObjectId,
        resource_object_id::ResourceObjectId,
    },
};

#[derive(Clone, Debug)]
pub struct CreateAppRoleAssignmentCommand {
    app_role_id: AppRoleId,
    principal_object_id: PrincipalObjectId,
    resource_object_id: ResourceObjectId,
}

impl CreateAppRoleAssignmentCommand {
    pub fn new(
        app_role_id: String,
        principal_object_id: String,
        resource_object_id: String,
    ) -> Result<Self, AppRoleAssignmentDomainError> {
        Ok(Self {
            app_role_id: AppRoleId::new(app_role_id)?,
            principal_object_id: PrincipalObjectId::new(principal_object_id)?,
            resource_object_id: ResourceObjectId::new(resource_object_id)?,
        })
    }

    pub fn app_role_id(&self) -> &AppRoleId {
        &self.app_role_id
    }

    pub fn principal_object_id(&self) -> &PrincipalObjectId {
        &self.principal_object_id
    }

    pub fn resource_object_id(&self) -> &ResourceObjectId {
        &self.resource_object_id
    }
}
