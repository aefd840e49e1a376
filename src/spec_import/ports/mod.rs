//! Port contracts for specification detection and import.

pub mod detector;
pub mod importer;
pub mod transport;

pub use detector::{SpecDetector, SpecImportError, SpecImportResult};
pub use importer::SpecImporter;
pub use transport::DetectionRequestSink;
