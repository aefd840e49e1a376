//! Application services for specification detection and import.

mod sync;

pub use sync::{SpecSyncError, SpecSyncResult, SpecSyncService};
