//! End-to-end detect-and-import tests over the loopback transport.
//!
//! Detection requests leave through the transport port and replies come
//! back through the reply router on a spawned task, so every test crosses
//! the correlation registry.

use crate::in_memory::helpers::{
    SyncHarness, document, project, sync_harness, sync_harness_with,
};
use rendezvous::spec_import::{ports::SpecImportError, services::SpecSyncError};
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn found_documents_are_imported(sync_harness: SyncHarness) {
    sync_harness
        .sink
        .add_documents(
            project("billing"),
            [
                document("api/openapi.yaml", "OpenAPI"),
                document("events/asyncapi.yaml", "asyncapi"),
            ],
        )
        .expect("catalogue update");

    let outcome = sync_harness
        .service
        .detect_and_import("billing")
        .await
        .expect("detect and import should succeed");

    assert!(outcome.found());
    assert!(!outcome.import_failed());
    assert_eq!(outcome.detected(), 2);
    assert_eq!(outcome.imported(), 2);
    let stored = sync_harness
        .importer
        .imported(&project("billing"))
        .expect("importer state");
    assert_eq!(stored.len(), 2);
    assert!(sync_harness.registry.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_without_documents_skips_import(sync_harness: SyncHarness) {
    let outcome = sync_harness
        .service
        .detect_and_import("empty-project")
        .await
        .expect("detect and import should succeed");

    assert!(!outcome.found());
    assert!(!outcome.import_failed());
    assert!(
        sync_harness
            .importer
            .imported(&project("empty-project"))
            .expect("importer state")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn import_failure_is_reported_not_raised(sync_harness: SyncHarness) {
    sync_harness
        .sink
        .add_documents(project("locked"), [document("spec.yaml", "openapi")])
        .expect("catalogue update");
    sync_harness
        .importer
        .reject(project("locked"), "storage is read-only")
        .expect("importer update");

    let outcome = sync_harness
        .service
        .detect_and_import("locked")
        .await
        .expect("import failures are reported in the outcome");

    assert!(outcome.found());
    assert!(outcome.import_failed());
    assert!(
        outcome
            .failure()
            .is_some_and(|reason| reason.contains("storage is read-only"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn silent_worker_times_out_without_leaking() {
    let harness = sync_harness_with(Duration::ZERO, Duration::from_millis(20));
    harness
        .sink
        .silence_project(project("quiet"))
        .expect("catalogue update");

    let result = harness.service.detect_and_import("quiet").await;

    assert!(matches!(
        result,
        Err(SpecSyncError::Detection(SpecImportError::DetectionTimedOut { .. }))
    ));
    assert!(harness.registry.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_transport_fails_fast_without_leaking(sync_harness: SyncHarness) {
    sync_harness.sink.go_offline().expect("transport update");

    let result = sync_harness.service.detect_and_import("billing").await;

    assert!(matches!(
        result,
        Err(SpecSyncError::Detection(SpecImportError::Backend(_)))
    ));
    assert!(sync_harness.registry.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_syncs_receive_their_own_replies() {
    let harness = sync_harness_with(Duration::from_millis(5), Duration::from_secs(5));
    for n in 0..8 {
        let docs = (0..=n).map(|d| document(&format!("spec-{d}.yaml"), "openapi"));
        harness
            .sink
            .add_documents(project(&format!("project-{n}")), docs)
            .expect("catalogue update");
    }

    let service = harness.service.clone();
    let tasks: Vec<_> = (0..8)
        .map(|n| {
            let service = service.clone();
            tokio::spawn(async move { service.detect_and_import(&format!("project-{n}")).await })
        })
        .collect();

    for (n, task) in tasks.into_iter().enumerate() {
        let outcome = task
            .await
            .expect("sync task should not panic")
            .expect("detect and import should succeed");
        assert_eq!(outcome.project().as_str(), format!("project-{n}"));
        assert_eq!(outcome.detected(), n + 1);
    }
    assert_eq!(harness.sink.sent().expect("sent requests").len(), 8);
    assert!(harness.registry.is_empty());
}
