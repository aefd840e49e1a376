//! Shared world state for specification sync BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use rendezvous::correlation::CorrelationRegistry;
use rendezvous::spec_import::{
    adapters::{
        correlated::{CorrelatedSpecDetector, DetectionConfig, DetectionReplyRouter},
        memory::{InMemorySpecImporter, LoopbackDetectionSink},
    },
    domain::{DetectionReply, ProjectRef, SpecSyncOutcome},
    services::{SpecSyncError, SpecSyncService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestSyncService =
    SpecSyncService<CorrelatedSpecDetector<LoopbackDetectionSink>, InMemorySpecImporter>;

/// Deadline for detection replies; only silent projects reach it.
const REPLY_TIMEOUT: Duration = Duration::from_millis(50);

/// Scenario world for specification sync behaviour tests.
pub struct SyncWorld {
    /// Registry shared by detector and reply router.
    pub registry: CorrelationRegistry<DetectionReply>,
    /// Loopback transport standing in for the detection worker.
    pub sink: Arc<LoopbackDetectionSink>,
    /// Importer recording stored documents.
    pub importer: Arc<InMemorySpecImporter>,
    /// The service under test.
    pub service: TestSyncService,
    /// Result of the last sync call.
    pub last_result: Option<Result<SpecSyncOutcome, SpecSyncError>>,
}

impl SyncWorld {
    /// Creates a world with an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        let registry = CorrelationRegistry::<DetectionReply>::new();
        let router = DetectionReplyRouter::new(registry.clone());
        let sink = Arc::new(LoopbackDetectionSink::new(router));
        let importer = Arc::new(InMemorySpecImporter::new());
        let detector = CorrelatedSpecDetector::new(
            Arc::clone(&sink),
            registry.clone(),
            DetectionConfig::with_reply_timeout(REPLY_TIMEOUT),
        );
        Self {
            registry,
            sink,
            importer: Arc::clone(&importer),
            service: SpecSyncService::new(Arc::new(detector), importer),
            last_result: None,
        }
    }

    /// Returns the outcome of the last successful sync call.
    pub fn last_outcome(&self) -> Result<&SpecSyncOutcome, eyre::Report> {
        match &self.last_result {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(err)) => Err(eyre::eyre!("sync failed unexpectedly: {err}")),
            None => Err(eyre::eyre!("missing sync result in scenario world")),
        }
    }
}

impl Default for SyncWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SyncWorld {
    SyncWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a project reference from step text.
pub fn parse_project(raw: &str) -> Result<ProjectRef, eyre::Report> {
    ProjectRef::new(raw).map_err(|err| eyre::eyre!("invalid project '{raw}': {err}"))
}
