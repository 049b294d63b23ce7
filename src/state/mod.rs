/// State management module
///
/// This module handles the review session state:
/// - Pages, navigation and press dispatch (session.rs)
/// - The report emitted when the session ends (report.rs)

pub mod report;
pub mod session;

pub use report::Report;
pub use session::ReviewSession;
