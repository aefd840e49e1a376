//! Loopback transport answering detection requests from a catalogue.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::spec_import::{
    adapters::correlated::DetectionReplyRouter,
    domain::{DetectionReply, DetectionRequest, ProjectRef, SpecDocument},
    ports::{DetectionRequestSink, SpecImportError, SpecImportResult},
};

/// [`DetectionRequestSink`] that answers on a spawned task.
///
/// Replies travel back through a [`DetectionReplyRouter`], exercising the
/// same path a real worker would use. Projects can be configured to yield
/// documents, report a failure, or never reply.
#[derive(Debug, Clone)]
pub struct LoopbackDetectionSink {
    router: DetectionReplyRouter,
    delay: Duration,
    state: Arc<RwLock<LoopbackState>>,
}

#[derive(Debug, Default)]
struct LoopbackState {
    catalogue: HashMap<ProjectRef, Vec<SpecDocument>>,
    failures: HashMap<ProjectRef, String>,
    silent: HashSet<ProjectRef>,
    sent: Vec<DetectionRequest>,
    offline: bool,
}

fn lock_error(err: impl ToString) -> SpecImportError {
    SpecImportError::backend(std::io::Error::other(err.to_string()))
}

impl LoopbackDetectionSink {
    /// Creates a sink that replies immediately through `router`.
    #[must_use]
    pub fn new(router: DetectionReplyRouter) -> Self {
        Self {
            router,
            delay: Duration::ZERO,
            state: Arc::default(),
        }
    }

    /// Delays every reply by `delay`.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Registers the documents reported for `project`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn add_documents(
        &self,
        project: ProjectRef,
        documents: impl IntoIterator<Item = SpecDocument>,
    ) -> SpecImportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.catalogue.entry(project).or_default().extend(documents);
        Ok(())
    }

    /// Makes detection for `project` reply with a failure.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn fail_project(
        &self,
        project: ProjectRef,
        reason: impl Into<String>,
    ) -> SpecImportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failures.insert(project, reason.into());
        Ok(())
    }

    /// Accepts requests for `project` without ever replying.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn silence_project(&self, project: ProjectRef) -> SpecImportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.silent.insert(project);
        Ok(())
    }

    /// Makes every subsequent `send` fail.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn go_offline(&self) -> SpecImportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.offline = true;
        Ok(())
    }

    /// Returns every request accepted so far.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn sent(&self) -> SpecImportResult<Vec<DetectionRequest>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.sent.clone())
    }
}

#[async_trait]
impl DetectionRequestSink for LoopbackDetectionSink {
    async fn send(&self, request: DetectionRequest) -> SpecImportResult<()> {
        let reply = {
            let mut state = self.state.write().map_err(lock_error)?;
            if state.offline {
                return Err(SpecImportError::backend(std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "loopback transport is offline",
                )));
            }
            state.sent.push(request.clone());

            let project = request.project();
            let correlation_id = request.correlation_id().clone();
            if state.silent.contains(project) {
                None
            } else if let Some(reason) = state.failures.get(project) {
                Some(DetectionReply::failed(correlation_id, reason.clone()))
            } else {
                let documents = state.catalogue.get(project).cloned().unwrap_or_default();
                Some(DetectionReply::found(correlation_id, documents))
            }
        };

        if let Some(detection_reply) = reply {
            let router = self.router.clone();
            let delay = self.delay;
            tokio::spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                router.route(detection_reply);
            });
        }
        Ok(())
    }
}
