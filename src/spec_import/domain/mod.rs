//! Domain model for specification detection and import.

mod document;
mod error;
mod messages;
mod outcome;
mod project;

pub use document::{DetectionReport, SpecDocument};
pub use error::SpecImportDomainError;
pub use messages::{DetectionReply, DetectionRequest};
pub use outcome::SpecSyncOutcome;
pub use project::ProjectRef;
