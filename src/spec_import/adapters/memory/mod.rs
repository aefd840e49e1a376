//! In-memory adapters for specification detection and import.

mod importer;
mod loopback;

pub use importer::InMemorySpecImporter;
pub use loopback::LoopbackDetectionSink;
