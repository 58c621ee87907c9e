//! Critical path analysis.
//!
//! Turns forward/backward pass results into per-task slack and criticality,
//! and extracts one end-to-end chain of critical tasks.

mod evaluation;
mod extraction;
mod types;

pub use evaluation::evaluate_slack;
pub use extraction::extract_critical_path;
pub use types::{SlackSummary, TaskTiming};
