/// Dataset module
///
/// This module turns a data directory into batches of labelled samples:
/// - Sidecar label parsing (label.rs)
/// - Directory scanning and sidecar policy (loader.rs)
/// - Random fixed-size batching (batcher.rs)

pub mod batcher;
pub mod label;
pub mod loader;

pub use batcher::{Batch, Batcher};
pub use label::Label;
pub use loader::{Sample, SidecarPolicy};
