//! Detection across an asynchronous boundary.
//!
//! [`CorrelatedSpecDetector`] registers a correlation ID, sends the request
//! through a [`crate::spec_import::ports::DetectionRequestSink`] and waits
//! for the reply that [`DetectionReplyRouter`] delivers from the inbound
//! path.

mod config;
mod detector;
mod router;

pub use config::DetectionConfig;
pub use detector::CorrelatedSpecDetector;
pub use router::DetectionReplyRouter;
