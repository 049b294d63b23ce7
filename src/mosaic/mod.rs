/// Mosaic module
///
/// This module handles the reviewable grid:
/// - Fixed-grid slot layout (layout.rs)
/// - Per-thumbnail label and correction state (unit.rs)
/// - Pages of units sharing one layout, hit-testing (page.rs)
/// - Thumbnail decoding and scaling (thumbnail.rs)

pub mod layout;
pub mod page;
pub mod thumbnail;
pub mod unit;

pub use layout::Slot;
pub use page::{PressOutcome, ReviewPage};
pub use unit::ReviewUnit;
