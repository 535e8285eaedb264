use std::time::Duration;

use app_role_assignment_provider::{
    app_role_assignments::{
        application::resources::app_role_assignment_resource_impl::APP_ROLE_ASSIGNMENT_RESOURCE_TYPE,
        domain::model::enums::app_role_assignment_domain_error::AppRoleAssignmentDomainError,
    },
    shared::domain::{
        model::resource_schema::{DEFAULT_OPERATION_TIMEOUT, ResourceTimeouts},
        services::managed_resource::{ManagedResource, ReadOutcome},
    },
};

use crate::support::{
    FakeAppRoleAssignedToClient, FakeServicePrincipalClient, RESOURCE_OBJECT_ID, create_command,
    create_harness, create_harness_with_timeouts, existing_assignment_id,
    existing_assignment_record,
};

#[test]
fn schema_declares_immutable_inputs_and_computed_outputs() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::new(),
    );

    let schema = harness.resource.schema();

    assert_eq!(schema.type_name(), APP_ROLE_ASSIGNMENT_RESOURCE_TYPE);
    assert!(schema.is_importable());
    assert_eq!(schema.attributes().len(), 6);

    for name in ["app_role_id", "principal_object_id", "resource_object_id"] {
        let attribute = schema.attribute(name).expect("input attribute");
        assert!(attribute.required(), "{name} should be required");
        assert!(attribute.is_force_new(), "{name} should force replacement");
        assert_eq!(attribute.validator(), Some("uuid"));
    }
    for name in [
        "principal_display_name",
        "principal_type",
        "resource_display_name",
    ] {
        let attribute = schema.attribute(name).expect("computed attribute");
        assert!(attribute.computed());
        assert!(!attribute.required());
    }

    assert_eq!(schema.timeouts().create, DEFAULT_OPERATION_TIMEOUT);
    assert_eq!(schema.timeouts().read, DEFAULT_OPERATION_TIMEOUT);
    assert_eq!(schema.timeouts().delete, DEFAULT_OPERATION_TIMEOUT);
}

#[tokio::test]
async fn create_then_read_round_trips_through_the_resource() {
    let harness = create_harness(
        FakeServicePrincipalClient::with_service_principals(&[RESOURCE_OBJECT_ID]),
        FakeAppRoleAssignedToClient::new(),
    );

    let created = harness
        .resource
        .create(create_command())
        .await
        .expect("create should succeed");
    let outcome = harness
        .resource
        .read(created.id().to_string())
        .await
        .expect("read should succeed");

    assert_eq!(outcome, ReadOutcome::Present(created));
}

#[tokio::test]
async fn read_that_outlives_its_timeout_fails() {
    let harness = create_harness_with_timeouts(
        FakeServicePrincipalClient::with_service_principals(&[]),
        FakeAppRoleAssignedToClient::with_assignments(vec![existing_assignment_record()])
            .delaying_get_by(Duration::from_millis(500)),
        ResourceTimeouts {
            read: Duration::from_millis(20),
            ..ResourceTimeouts::default()
        },
    );

    let error = harness
        .resource
        .read(existing_assignment_id())
        .await
        .expect_err("read should time out");

    assert!(matches!(
        error,
        AppRoleAssignmentDomainError::OperationTimedOut {
            operation: "read",
            ..
        }
    ));
    assert_eq!(error.summary(), "Operation timed out");
}

#[tokio::test]
async fn create_timeout_during_read_back_keeps_created_id() {
    let harness = create_harness_with_timeouts(
        FakeServicePrincipalClient::with_service_principals(&[RESOURCE_OBJECT_ID]),
        FakeAppRoleAssignedToClient::new().delaying_get_by(Duration::from_millis(500)),
        ResourceTimeouts {
            create: Duration::from_millis(50),
            ..ResourceTimeouts::default()
        },
    );

    let error = harness
        .resource
        .create(create_command())
        .await
        .expect_err("create should time out");

    let id = error.created_id().expect("created id should be reported");
    assert_eq!(id.to_string(), format!("{RESOURCE_OBJECT_ID}/assignment-1"));
    assert!(harness.assigned_to_client.contains(&id.to_string()));
    assert_eq!(error.summary(), "Operation timed out");
    assert!(matches!(
        error,
        AppRoleAssignmentDomainError::CreatedStateUnavailable { ref source, .. }
            if matches!(
                **source,
                AppRoleAssignmentDomainError::OperationTimedOut {
                    operation: "create",
                    ..
                }
            )
    ));
}
