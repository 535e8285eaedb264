use app_role_assignment_provider::{
    app_role_assignments::domain::{
        model::{
            commands::delete_app_role_assignment_command::DeleteAppRoleAssignmentCommand,
            enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
        },
        services::app_role_assignment_command_service::AppRoleAssignmentCommandService,
    },
    shared::domain::services::managed_resource::ManagedResource,
};

use crate::support::{
    EXISTING_ASSIGNMENT_ID, FakeAppRoleAssignedToClient, FakeFailure, FakeServicePrincipalClient,
    RESOURCE_OBJECT_ID, create_harness, existing_assignment_id, existing_assignment_record,
};

fn delete_command() -> DeleteAppRoleAssignmentCommand {
    DeleteAppRoleAssignmentCommand::new(existing_assignment_id()).expect("fixture id should parse")
}

#[tokio::test]
async fn handle_delete_removes_remote_assignment() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::with_assignments(vec![existing_assignment_record()]),
    );

    harness
        .command_service
        .handle_delete(delete_command())
        .await
        .expect("delete should succeed");

    assert!(!harness.assigned_to_client.contains(&existing_assignment_id()));
    assert_eq!(harness.assigned_to_client.stats(), (0, 0, 1));
}

#[tokio::test]
async fn handle_delete_reports_remote_failure_against_id() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::with_assignments(vec![existing_assignment_record()])
            .failing_delete_with(FakeFailure::Api(403)),
    );

    let error = harness
        .command_service
        .handle_delete(delete_command())
        .await
        .expect_err("delete should fail");

    assert!(matches!(
        error,
        AppRoleAssignmentDomainError::DeleteFailed { ref id, .. } if *id == existing_assignment_id()
    ));
    assert_eq!(error.attribute_path(), Some("id"));
    assert_eq!(error.summary(), "Deleting app role assignment");
    assert!(harness.assigned_to_client.contains(&existing_assignment_id()));
}

#[tokio::test]
async fn handle_delete_of_absent_assignment_is_an_error() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::new(),
    );

    let error = harness
        .command_service
        .handle_delete(delete_command())
        .await
        .expect_err("delete should fail");

    assert!(matches!(error, AppRoleAssignmentDomainError::DeleteFailed { .. }));
}

#[tokio::test]
async fn resource_delete_rejects_id_with_empty_assignment_segment() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::with_assignments(vec![existing_assignment_record()]),
    );

    let error = harness
        .resource
        .delete(format!("{RESOURCE_OBJECT_ID}/"))
        .await
        .expect_err("delete should fail");

    assert!(matches!(
        error,
        AppRoleAssignmentDomainError::InvalidAppRoleAssignmentId(_)
    ));
    assert_eq!(harness.assigned_to_client.stats(), (0, 0, 0));
}

#[tokio::test]
async fn resource_delete_rejects_padded_id_and_keeps_assignment() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::with_assignments(vec![existing_assignment_record()]),
    );

    for id in [
        format!("  {}\n", existing_assignment_id()),
        format!("{}/ {}", RESOURCE_OBJECT_ID, EXISTING_ASSIGNMENT_ID),
    ] {
        let error = harness
            .resource
            .delete(id.clone())
            .await
            .expect_err("delete should fail");

        assert_eq!(error.attribute_path(), Some("id"), "{id:?} should be rejected");
    }

    assert_eq!(harness.assigned_to_client.stats(), (0, 0, 0));
    assert!(harness.assigned_to_client.contains(&existing_assignment_id()));
}
